pub mod features;
pub mod projection;

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;

use crate::error::{CarteError, Result};
use crate::model::GeoPoint;
use features::{BaseLayer, LayerKind};
use projection::{projected_bounds, LambertConformal, FRANCE_EXTENT};

/// Output raster dimensions, pixels.
pub const IMAGE_WIDTH: u32 = 3000;
pub const IMAGE_HEIGHT: u32 = 3600;

const MARKER_RADIUS: i32 = 6;
const MARKER_COLOR: RGBColor = RED;
const LAND_COLOR: RGBColor = RGBColor(211, 211, 211);
const WATER_COLOR: RGBColor = RGBColor(173, 216, 230);

/// Renders the resolved coordinates over a France-extent conic map.
///
/// Base layers are drawn first, in their fixed order, then every coordinate
/// as a fixed-size red marker on top. The output is a single PNG at
/// [`IMAGE_WIDTH`]×[`IMAGE_HEIGHT`].
pub fn render_map(coords: &[GeoPoint], layers: &[BaseLayer], output: &Path) -> Result<()> {
    let projection = LambertConformal::france();
    let ((x_min, y_min), (x_max, y_max)) = projected_bounds(&projection, &FRANCE_EXTENT);

    let root = BitMapBackend::new(output, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    for layer in layers {
        draw_layer(&mut chart, &projection, layer)?;
    }

    info!(
        point_count = coords.len(),
        "plotting points through the conic projection"
    );
    chart
        .draw_series(coords.iter().map(|point| {
            Circle::new(
                projection.project(point.longitude, point.latitude),
                MARKER_RADIUS,
                MARKER_COLOR.filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_layer<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    projection: &LambertConformal,
    layer: &BaseLayer,
) -> Result<()> {
    let style = layer_style(layer.kind);
    if layer.kind.is_filled() {
        chart
            .draw_series(
                layer
                    .shapes
                    .iter()
                    .map(|shape| Polygon::new(project_shape(projection, shape), style)),
            )
            .map_err(render_err)?;
    } else {
        chart
            .draw_series(
                layer
                    .shapes
                    .iter()
                    .map(|shape| PathElement::new(project_shape(projection, shape), style)),
            )
            .map_err(render_err)?;
    }
    Ok(())
}

fn layer_style(kind: LayerKind) -> ShapeStyle {
    match kind {
        LayerKind::Borders => BLACK.stroke_width(2),
        LayerKind::Coastline => BLACK.stroke_width(3),
        LayerKind::Land => LAND_COLOR.filled(),
        LayerKind::Ocean | LayerKind::Lakes => WATER_COLOR.filled(),
        LayerKind::Rivers => WATER_COLOR.stroke_width(2),
    }
}

fn project_shape(projection: &LambertConformal, shape: &[(f64, f64)]) -> Vec<(f64, f64)> {
    shape
        .iter()
        .map(|&(longitude, latitude)| projection.project(longitude, latitude))
        .collect()
}

fn render_err<E: std::fmt::Display>(error: E) -> CarteError {
    CarteError::Render(error.to_string())
}
