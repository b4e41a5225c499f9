use pizza_chart_rs::api::{GridConfigInput, parse_grid_config};
use pizza_chart_rs::core::PlotConfig;
use pizza_chart_rs::error::ChartError;

fn input() -> GridConfigInput {
    GridConfigInput {
        ring_count_text: "3".to_owned(),
        sector_count_text: "6".to_owned(),
        tick_count_text: "9".to_owned(),
        use_custom_boundaries: false,
        boundary_text: String::new(),
        legend_font_text: "10".to_owned(),
        use_custom_ticks: false,
        legend_tick_text: String::new(),
    }
}

#[test]
fn uniform_config_parses_with_default_boundaries() {
    let parsed = parse_grid_config(&input()).expect("valid config");
    assert_eq!(parsed.config.ring_count, 3);
    assert_eq!(parsed.config.sector_count, 6);
    assert_eq!(parsed.config.ring_boundaries.len(), 2);
    assert!((parsed.config.ring_boundaries[0] - 1.0 / 3.0).abs() <= 1e-12);
    assert!((parsed.config.ring_boundaries[1] - 2.0 / 3.0).abs() <= 1e-12);
    assert!(parsed.legend.custom_ticks.is_empty());
}

#[test]
fn custom_boundaries_are_accepted_in_order() {
    let mut raw = input();
    raw.use_custom_boundaries = true;
    raw.boundary_text = "0.33, 0.67".to_owned();
    let parsed = parse_grid_config(&raw).expect("valid config");
    assert_eq!(parsed.config.ring_boundaries, vec![0.33, 0.67]);
}

#[test]
fn custom_boundaries_require_ring_count_minus_one_values() {
    let mut raw = input();
    raw.use_custom_boundaries = true;
    raw.boundary_text = "0.5".to_owned();
    let err = parse_grid_config(&raw).expect_err("wrong boundary count");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn empty_custom_boundary_text_is_rejected() {
    let mut raw = input();
    raw.use_custom_boundaries = true;
    let err = parse_grid_config(&raw).expect_err("empty boundaries");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn boundary_outside_unit_interval_is_rejected() {
    let mut raw = input();
    raw.use_custom_boundaries = true;
    raw.boundary_text = "0.5, 1.2".to_owned();
    let err = parse_grid_config(&raw).expect_err("boundary outside (0, 1)");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn non_increasing_boundaries_are_rejected() {
    let mut raw = input();
    raw.use_custom_boundaries = true;
    raw.boundary_text = "0.6, 0.4".to_owned();
    let err = parse_grid_config(&raw).expect_err("decreasing boundaries");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn non_numeric_count_is_a_parse_error() {
    let mut raw = input();
    raw.ring_count_text = "three".to_owned();
    let err = parse_grid_config(&raw).expect_err("non-numeric ring count");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn counts_below_minimum_are_config_errors() {
    let mut raw = input();
    raw.ring_count_text = "1".to_owned();
    let err = parse_grid_config(&raw).expect_err("ring count below minimum");
    assert!(matches!(err, ChartError::Config(_)));

    let mut raw = input();
    raw.tick_count_text = "2".to_owned();
    let err = parse_grid_config(&raw).expect_err("tick count below minimum");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn legend_ticks_must_be_strictly_increasing_in_text_form() {
    let mut raw = input();
    raw.use_custom_ticks = true;
    raw.legend_tick_text = "0.2, 0.8, 0.5".to_owned();
    let err = parse_grid_config(&raw).expect_err("unsorted tick text");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn legend_ticks_parse_when_increasing() {
    let mut raw = input();
    raw.use_custom_ticks = true;
    raw.legend_tick_text = "0.2, 0.5, 0.8".to_owned();
    let parsed = parse_grid_config(&raw).expect("valid ticks");
    assert_eq!(parsed.legend.custom_ticks, vec![0.2, 0.5, 0.8]);
}

#[test]
fn disabled_custom_ticks_ignore_tick_text() {
    let mut raw = input();
    raw.legend_tick_text = "0.2, 0.8".to_owned();
    let parsed = parse_grid_config(&raw).expect("valid config");
    assert!(parsed.legend.custom_ticks.is_empty());
}

#[test]
fn plot_config_invariant_holds_for_all_valid_ring_counts() {
    for ring_count in 2..10 {
        let config = PlotConfig::uniform(ring_count, 4, 5).expect("valid config");
        assert_eq!(config.ring_boundaries.len(), ring_count - 1);
        assert!(
            config
                .ring_boundaries
                .iter()
                .all(|&b| b > 0.0 && b < 1.0)
        );
        assert!(
            config
                .ring_boundaries
                .windows(2)
                .all(|pair| pair[1] > pair[0])
        );
    }
}
