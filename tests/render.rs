use std::fs;

use carte_inscriptions::model::GeoPoint;
use carte_inscriptions::render;
use carte_inscriptions::render::features::{load_base_layers, LayerKind};
use carte_inscriptions::render::projection::{
    projected_bounds, LambertConformal, FRANCE_EXTENT,
};
use tempfile::tempdir;

const BASEMAP_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "layer": "rivers" },
      "geometry": { "type": "LineString", "coordinates": [[0.0, 44.0], [3.0, 47.0]] }
    },
    {
      "type": "Feature",
      "properties": { "layer": "land" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-5.0, 41.0], [10.0, 41.0], [10.0, 52.0], [-5.0, 52.0], [-5.0, 41.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "layer": "volcanoes" },
      "geometry": { "type": "Point", "coordinates": [2.0, 45.0] }
    }
  ]
}"#;

#[test]
fn projection_is_centred_on_france() {
    let projection = LambertConformal::france();

    let (x_origin, y_origin) = projection.project(3.0, 46.5);
    assert!(x_origin.abs() < 1e-6, "central point must sit at x = 0");
    assert!(y_origin.abs() < 1e-6, "central point must sit at y = 0");

    let (x_north, y_north) = projection.project(3.0, 48.0);
    assert!(x_north.abs() < 1e-6, "central meridian stays at x = 0");
    let (_, y_south) = projection.project(3.0, 44.0);
    assert!(y_north > y_south, "north must project above south");
}

#[test]
fn projected_extent_is_a_proper_envelope() {
    let projection = LambertConformal::france();
    let ((x_min, y_min), (x_max, y_max)) = projected_bounds(&projection, &FRANCE_EXTENT);
    assert!(x_min < x_max);
    assert!(y_min < y_max);

    // The envelope must contain interior points of the extent.
    let (x, y) = projection.project(2.35, 48.85);
    assert!(x_min <= x && x <= x_max);
    assert!(y_min <= y && y <= y_max);
}

#[test]
fn base_layers_are_grouped_in_draw_order() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("basemap.geojson");
    fs::write(&path, BASEMAP_GEOJSON).expect("basemap written");

    let layers = load_base_layers(&path).expect("basemap parsed");
    let kinds: Vec<LayerKind> = layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(
        kinds,
        vec![LayerKind::Land, LayerKind::Rivers],
        "land draws before rivers, unknown layers are skipped"
    );
    assert_eq!(layers[0].shapes.len(), 1);
    assert_eq!(layers[1].shapes[0].len(), 2);
}

#[test]
fn render_map_draws_layers_and_markers() {
    let temp_dir = tempdir().expect("temporary directory");
    let basemap = temp_dir.path().join("basemap.geojson");
    fs::write(&basemap, BASEMAP_GEOJSON).expect("basemap written");
    let layers = load_base_layers(&basemap).expect("basemap parsed");

    let coords = vec![
        GeoPoint {
            latitude: 48.85,
            longitude: 2.35,
        },
        GeoPoint {
            latitude: 43.29,
            longitude: 5.37,
        },
    ];
    let output = temp_dir.path().join("carte.png");
    render::render_map(&coords, &layers, &output).expect("map rendered");

    assert!(fs::metadata(&output).expect("output file present").len() > 0);
}
