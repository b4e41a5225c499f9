use crate::core::colormap::{jet, normalize};
use crate::core::{ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use ordered_float::OrderedFloat;

/// Number of gradient strips sampled along the bar.
const GRADIENT_STEPS: usize = 256;
/// Automatic label count when no custom ticks are supplied.
const AUTO_TICK_COUNT: usize = 6;
const TICK_MARK_LENGTH: f64 = 6.0;
const TICK_STROKE_WIDTH: f64 = 1.0;
const LABEL_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

// Bar placement as fractions of the viewport, keeping the bar centered
// with room for labels on the right.
const BAR_X_FRACTION: f64 = 0.44;
const BAR_WIDTH_FRACTION: f64 = 0.12;
const BAR_TOP_FRACTION: f64 = 0.05;
const BAR_HEIGHT_FRACTION: f64 = 0.9;

/// Builds the vertical colorbar legend for a resolved value range.
///
/// With custom ticks, the visible span is clamped to the tick bounds and
/// exactly those values are labeled (2 decimal places). Without them, the
/// bar spans the full range with evenly spaced labels.
///
/// A degenerate range is rejected here rather than patched: collapsing
/// equal bounds is the registry's job, upstream of any render call.
pub fn build_legend_frame(
    range: ValueRange,
    font_size: f64,
    custom_ticks: &[f64],
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    viewport.validate()?;
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(ChartError::Config(format!(
            "legend font size must be > 0, got {font_size}"
        )));
    }
    if range.is_degenerate() {
        return Err(ChartError::Config(format!(
            "degenerate value range ({}, {}); resolve the range before rendering",
            range.min, range.max
        )));
    }

    let (visible, labels) = if custom_ticks.is_empty() {
        (range, auto_labels(range))
    } else {
        let span = ValueRange::from_ticks(custom_ticks)
            .ok_or_else(|| ChartError::Config("custom tick list must not be empty".to_owned()))?;
        if span.is_degenerate() {
            return Err(ChartError::Config(format!(
                "custom ticks collapse to a single value ({})",
                span.min
            )));
        }
        (span, sorted_unique(custom_ticks))
    };

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let bar_x = width * BAR_X_FRACTION;
    let bar_width = width * BAR_WIDTH_FRACTION;
    let bar_top = height * BAR_TOP_FRACTION;
    let bar_height = height * BAR_HEIGHT_FRACTION;

    let mut frame = RenderFrame::new(viewport);

    // Gradient strips, highest value at the top of the bar.
    let strip_height = bar_height / GRADIENT_STEPS as f64;
    for step in 0..GRADIENT_STEPS {
        let fraction = (step as f64 + 0.5) / GRADIENT_STEPS as f64;
        let value = visible.max - (visible.max - visible.min) * fraction;
        let (red, green, blue) = jet(normalize(value, range.min, range.max));
        frame.rects.push(RectPrimitive::new(
            bar_x,
            bar_top + step as f64 * strip_height,
            bar_width,
            strip_height,
            Color::rgb(red, green, blue),
        ));
    }

    let bar_right = bar_x + bar_width;
    let label_pad = font_size * 0.5;
    for value in labels {
        let fraction = (value - visible.min) / (visible.max - visible.min);
        let y = bar_top + (1.0 - fraction) * bar_height;
        frame.lines.push(LinePrimitive::new(
            bar_right - TICK_MARK_LENGTH,
            y,
            bar_right,
            y,
            TICK_STROKE_WIDTH,
            LABEL_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format!("{value:.2}"),
            bar_right + label_pad,
            y,
            font_size,
            LABEL_COLOR,
            TextHAlign::Left,
        ));
    }

    Ok(frame)
}

fn auto_labels(range: ValueRange) -> Vec<f64> {
    (0..AUTO_TICK_COUNT)
        .map(|k| range.min + (range.max - range.min) * k as f64 / (AUTO_TICK_COUNT - 1) as f64)
        .collect()
}

fn sorted_unique(ticks: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<OrderedFloat<f64>> = ticks.iter().copied().map(OrderedFloat).collect();
    sorted.sort();
    sorted.dedup();
    sorted.into_iter().map(OrderedFloat::into_inner).collect()
}
