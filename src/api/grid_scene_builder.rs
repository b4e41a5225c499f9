use crate::core::colormap::{jet, normalize};
use crate::core::geometry::{axis_tick_positions, grid_wedges, outer_radius};
use crate::core::{DataMatrix, PlotConfig, Point, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, PolygonPrimitive, RenderFrame};

/// Pixel length of the inward axis tick marks.
const TICK_MARK_LENGTH: f64 = 4.0;
const FRAME_STROKE_WIDTH: f64 = 1.0;
const FRAME_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

/// Rendered grid scene: the draw frame plus the layout facts a host may
/// want for hit testing or labeling.
#[derive(Debug, Clone, PartialEq)]
pub struct GridScene {
    pub frame: RenderFrame,
    /// Tick positions in centered chart coordinates along `[-extent, extent]`.
    pub tick_positions: Vec<f64>,
    /// Half-span of the plot square; both axes cover `[-extent, extent]`.
    pub extent: f64,
}

/// Builds the annular grid scene for one plot item.
///
/// Pure with respect to its inputs: a resize means calling this again with
/// the new viewport, never mutating a previously returned scene.
pub fn build_grid_scene(
    config: &PlotConfig,
    data: &DataMatrix,
    range: ValueRange,
    viewport: Viewport,
) -> ChartResult<GridScene> {
    viewport.validate()?;
    config.validate()?;
    if data.shape() != (config.ring_count, config.sector_count) {
        let (rows, cols) = data.shape();
        return Err(ChartError::Shape(format!(
            "data is {rows} x {cols}, config expects {} x {}",
            config.ring_count, config.sector_count
        )));
    }
    if range.is_degenerate() {
        return Err(ChartError::Config(format!(
            "degenerate value range ({}, {}); resolve the range before rendering",
            range.min, range.max
        )));
    }

    let r_max = outer_radius(viewport);
    let center_x = f64::from(viewport.width) / 2.0;
    let center_y = f64::from(viewport.height) / 2.0;

    let mut frame = RenderFrame::new(viewport);

    for wedge in grid_wedges(
        config.ring_count,
        config.sector_count,
        &config.ring_boundaries,
        r_max,
    ) {
        let value = data.get(wedge.ring, wedge.sector)?;
        let (red, green, blue) = jet(normalize(value, range.min, range.max));
        let vertices: Vec<Point> = wedge
            .vertices
            .iter()
            .map(|vertex| Point::new(center_x + vertex.x, center_y - vertex.y))
            .collect();
        frame
            .polygons
            .push(PolygonPrimitive::new(vertices, Color::rgb(red, green, blue)));
    }

    let tick_positions = axis_tick_positions(r_max, config.tick_count);
    push_plot_border(&mut frame, center_x, center_y, r_max);
    push_tick_marks(&mut frame, &tick_positions, center_x, center_y, r_max);

    Ok(GridScene {
        frame,
        tick_positions,
        extent: r_max,
    })
}

/// Square border around the plot area, mirroring the axes box of the
/// reference renders.
fn push_plot_border(frame: &mut RenderFrame, center_x: f64, center_y: f64, r_max: f64) {
    let left = center_x - r_max;
    let right = center_x + r_max;
    let top = center_y - r_max;
    let bottom = center_y + r_max;
    for (x1, y1, x2, y2) in [
        (left, top, right, top),
        (right, top, right, bottom),
        (right, bottom, left, bottom),
        (left, bottom, left, top),
    ] {
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, FRAME_STROKE_WIDTH, FRAME_COLOR));
    }
}

/// Unlabeled inward tick marks on all four borders at the axis positions.
fn push_tick_marks(
    frame: &mut RenderFrame,
    tick_positions: &[f64],
    center_x: f64,
    center_y: f64,
    r_max: f64,
) {
    let left = center_x - r_max;
    let right = center_x + r_max;
    let top = center_y - r_max;
    let bottom = center_y + r_max;
    for &position in tick_positions {
        let x = center_x + position;
        let y = center_y - position;
        for (x1, y1, x2, y2) in [
            (x, bottom, x, bottom - TICK_MARK_LENGTH),
            (x, top, x, top + TICK_MARK_LENGTH),
            (left, y, left + TICK_MARK_LENGTH, y),
            (right, y, right - TICK_MARK_LENGTH, y),
        ] {
            frame
                .lines
                .push(LinePrimitive::new(x1, y1, x2, y2, FRAME_STROKE_WIDTH, FRAME_COLOR));
        }
    }
}
