use std::fs;
use std::path::Path;

use geojson::{GeoJson, Value as Geometry};

use crate::error::{CarteError, Result};

/// Base-map layer kinds, in the fixed order they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Borders,
    Coastline,
    Land,
    Ocean,
    Lakes,
    Rivers,
}

impl LayerKind {
    pub const DRAW_ORDER: [LayerKind; 6] = [
        LayerKind::Borders,
        LayerKind::Coastline,
        LayerKind::Land,
        LayerKind::Ocean,
        LayerKind::Lakes,
        LayerKind::Rivers,
    ];

    /// Whether shapes of this kind are filled rather than stroked.
    pub fn is_filled(self) -> bool {
        matches!(self, LayerKind::Land | LayerKind::Ocean | LayerKind::Lakes)
    }

    fn from_property(value: &str) -> Option<Self> {
        match value {
            "borders" => Some(LayerKind::Borders),
            "coastline" => Some(LayerKind::Coastline),
            "land" => Some(LayerKind::Land),
            "ocean" => Some(LayerKind::Ocean),
            "lakes" => Some(LayerKind::Lakes),
            "rivers" => Some(LayerKind::Rivers),
            _ => None,
        }
    }
}

/// All shapes of one layer kind, as lon/lat vertex chains.
///
/// For filled kinds each chain is a polygon exterior ring; for stroked kinds
/// it is a path.
#[derive(Debug)]
pub struct BaseLayer {
    pub kind: LayerKind,
    pub shapes: Vec<Vec<(f64, f64)>>,
}

/// Loads base-map layers from a GeoJSON FeatureCollection.
///
/// Each feature must carry a `layer` property naming one of the
/// [`LayerKind`] values; features without one, or with an unrecognized
/// value, are skipped. Layers come back grouped and sorted in draw order
/// regardless of feature order in the file.
pub fn load_base_layers(path: &Path) -> Result<Vec<BaseLayer>> {
    let raw = fs::read_to_string(path)?;
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(CarteError::InvalidBasemap(
            "expected a FeatureCollection".into(),
        ));
    };

    let mut layers: Vec<BaseLayer> = LayerKind::DRAW_ORDER
        .iter()
        .map(|&kind| BaseLayer {
            kind,
            shapes: Vec::new(),
        })
        .collect();

    for feature in collection.features {
        let Some(kind) = feature
            .properties
            .as_ref()
            .and_then(|properties| properties.get("layer"))
            .and_then(serde_json::Value::as_str)
            .and_then(LayerKind::from_property)
        else {
            continue;
        };
        let Some(geometry) = feature.geometry else {
            continue;
        };
        if let Some(layer) = layers.iter_mut().find(|layer| layer.kind == kind) {
            collect_shapes(&geometry.value, &mut layer.shapes);
        }
    }

    layers.retain(|layer| !layer.shapes.is_empty());
    Ok(layers)
}

fn collect_shapes(geometry: &Geometry, shapes: &mut Vec<Vec<(f64, f64)>>) {
    match geometry {
        Geometry::LineString(line) => shapes.push(positions_to_points(line)),
        Geometry::MultiLineString(lines) => {
            shapes.extend(lines.iter().map(|line| positions_to_points(line)));
        }
        // Exterior rings only; holes are ignored.
        Geometry::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                shapes.push(positions_to_points(exterior));
            }
        }
        Geometry::MultiPolygon(polygons) => {
            shapes.extend(
                polygons
                    .iter()
                    .filter_map(|rings| rings.first())
                    .map(|exterior| positions_to_points(exterior)),
            );
        }
        _ => {}
    }
}

fn positions_to_points(positions: &[Vec<f64>]) -> Vec<(f64, f64)> {
    positions
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| (position[0], position[1]))
        .collect()
}
