use pizza_chart_rs::api::{PREVIEW_LEGEND_VIEWPORT, build_legend_frame};
use pizza_chart_rs::core::ValueRange;
use pizza_chart_rs::error::ChartError;
use pizza_chart_rs::render::{NullRenderer, Renderer};

#[test]
fn legend_builds_gradient_bar_with_auto_labels() {
    let frame = build_legend_frame(
        ValueRange::new(0.0, 10.0),
        10.0,
        &[],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect("legend frame");

    assert_eq!(frame.rects.len(), 256);
    assert_eq!(frame.texts.len(), 6);
    assert_eq!(frame.lines.len(), 6);

    // Highest value sits at the top of the bar: warmer (redder) strip.
    let top = frame.rects.first().expect("top strip").fill_color;
    let bottom = frame.rects.last().expect("bottom strip").fill_color;
    assert!(top.red > bottom.red);
    assert!(bottom.blue > top.blue);
}

#[test]
fn custom_ticks_label_exactly_the_given_values() {
    let frame = build_legend_frame(
        ValueRange::new(0.2, 0.8),
        10.0,
        &[0.8, 0.2, 0.5],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect("legend frame");

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0.20", "0.50", "0.80"]);
}

#[test]
fn custom_tick_labels_use_two_decimal_places() {
    let frame = build_legend_frame(
        ValueRange::new(1.0, 2.0),
        10.0,
        &[1.0, 1.234, 2.0],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect("legend frame");
    assert!(frame.texts.iter().any(|text| text.text == "1.23"));
}

#[test]
fn custom_tick_labels_sit_inside_the_bar_span() {
    let frame = build_legend_frame(
        ValueRange::new(0.0, 1.0),
        10.0,
        &[0.0, 0.5, 1.0],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect("legend frame");

    let bar_top = frame.rects.first().expect("top strip").y;
    let last = frame.rects.last().expect("bottom strip");
    let bar_bottom = last.y + last.height;
    for text in &frame.texts {
        assert!(text.y >= bar_top - 1e-9);
        assert!(text.y <= bar_bottom + 1e-9);
    }
}

#[test]
fn degenerate_range_is_rejected() {
    let err = build_legend_frame(
        ValueRange::new(3.0, 3.0),
        10.0,
        &[],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect_err("degenerate range");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn single_valued_custom_ticks_are_rejected() {
    let err = build_legend_frame(
        ValueRange::new(0.0, 1.0),
        10.0,
        &[0.4, 0.4],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect_err("collapsed tick span");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn non_positive_font_size_is_rejected() {
    let err = build_legend_frame(
        ValueRange::new(0.0, 1.0),
        0.0,
        &[],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect_err("zero font size");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn legend_frame_passes_backend_validation() {
    let frame = build_legend_frame(
        ValueRange::new(-5.0, 5.0),
        12.0,
        &[-5.0, 0.0, 5.0],
        PREVIEW_LEGEND_VIEWPORT,
    )
    .expect("legend frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.last_rect_count, 256);
    assert_eq!(renderer.last_text_count, 3);
}
