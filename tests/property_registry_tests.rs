use pizza_chart_rs::api::PlotRegistry;
use pizza_chart_rs::core::{DataMatrix, PlotConfig, ValueRange};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ids_stay_dense_after_any_delete_sequence(
        item_count in 1usize..8,
        delete_picks in proptest::collection::vec(0usize..8, 0..6)
    ) {
        let config = PlotConfig::uniform(2, 3, 5).expect("valid config");
        let mut registry = PlotRegistry::new();
        for _ in 0..item_count {
            registry.create_item(config.clone()).expect("create");
        }

        for pick in delete_picks {
            if registry.is_empty() {
                break;
            }
            let target = format!("plot_{}", pick % registry.len() + 1);
            registry.delete_item(&target).expect("delete existing id");
        }

        let ids = registry.plot_ids();
        for (index, id) in ids.iter().enumerate() {
            let expected = format!("plot_{}", index + 1);
            prop_assert_eq!(id.as_str(), expected.as_str());
        }
    }

    #[test]
    fn resolved_range_is_never_degenerate(
        ticks in proptest::collection::vec(-1_000.0f64..1_000.0, 0..10)
    ) {
        let registry = PlotRegistry::new();
        let range = registry.resolve_range(&ticks);
        prop_assert!(range.min < range.max);
    }

    #[test]
    fn resolved_range_spans_tick_extremes(
        ticks in proptest::collection::vec(-1_000.0f64..1_000.0, 2..10)
    ) {
        let registry = PlotRegistry::new();
        let range = registry.resolve_range(&ticks);
        let min = ticks.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min < max {
            prop_assert_eq!(range, ValueRange::new(min, max));
        } else {
            prop_assert_eq!(range, ValueRange::unit());
        }
    }

    #[test]
    fn clamp_for_display_is_idempotent_and_bounded(
        values in proptest::collection::vec(-100.0f64..100.0, 6),
        low in -50.0f64..0.0,
        span in 0.1f64..50.0
    ) {
        let matrix = DataMatrix::from_rows(&[
            values[..3].to_vec(),
            values[3..].to_vec(),
        ]).expect("matrix");
        let range = ValueRange::new(low, low + span);

        let once = PlotRegistry::clamp_for_display(&matrix, range);
        let twice = PlotRegistry::clamp_for_display(&once, range);
        prop_assert_eq!(&once, &twice);
        for &value in once.values() {
            prop_assert!(value >= range.min && value <= range.max);
        }
    }

    #[test]
    fn global_range_always_covers_every_cell(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 6)
    ) {
        let config = PlotConfig::uniform(2, 3, 5).expect("valid config");
        let mut registry = PlotRegistry::new();
        let id = registry.create_item(config).expect("create");
        let text = format!(
            "{},{},{}\n{},{},{}",
            values[0], values[1], values[2], values[3], values[4], values[5]
        );
        registry.update_data(&id, &text).expect("update");

        let range = registry.global_range();
        for &value in &values {
            prop_assert!(range.min <= value || range == ValueRange::unit());
            prop_assert!(range.max >= value || range == ValueRange::unit());
        }
    }
}
