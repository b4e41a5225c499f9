use pizza_chart_rs::api::{PlotRegistry, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshotV1};
use pizza_chart_rs::core::{DataMatrix, PlotConfig};
use pizza_chart_rs::error::ChartError;

fn populated_registry() -> PlotRegistry {
    let mut registry = PlotRegistry::new();
    let config = PlotConfig::uniform(2, 3, 5).expect("valid config");
    let first = registry.create_item(config.clone()).expect("create");
    registry.create_item(config).expect("create");
    registry
        .update_data(&first, "1,2,3\n4,5,6")
        .expect("update");
    registry
}

#[test]
fn snapshot_round_trips_items_and_range() {
    let registry = populated_registry();
    let json = registry.snapshot_json().expect("serialize");
    let restored = PlotRegistry::from_snapshot_json(&json).expect("restore");

    assert_eq!(restored.plot_ids(), registry.plot_ids());
    assert_eq!(
        restored.item("plot_1").expect("item").data,
        registry.item("plot_1").expect("item").data
    );
    assert_eq!(restored.global_range(), registry.global_range());
}

#[test]
fn snapshot_json_carries_schema_version() {
    let registry = populated_registry();
    let json = registry.snapshot_json().expect("serialize");
    let snapshot: RegistrySnapshotV1 = serde_json::from_str(&json).expect("parse");
    assert_eq!(snapshot.schema_version, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let registry = populated_registry();
    let json = registry.snapshot_json().expect("serialize");
    let tampered = json.replace("\"schema_version\": 1", "\"schema_version\": 99");
    let err = PlotRegistry::from_snapshot_json(&tampered).expect_err("bad version");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn snapshot_with_mismatched_shape_is_rejected() {
    let mut snapshot = RegistrySnapshotV1 {
        schema_version: REGISTRY_SNAPSHOT_JSON_SCHEMA_V1,
        items: Default::default(),
    };
    snapshot.items.insert(
        "plot_1".to_owned(),
        pizza_chart_rs::api::PlotItemSnapshot {
            config: PlotConfig::uniform(3, 4, 5).expect("valid config"),
            data: DataMatrix::zeros(2, 2),
        },
    );
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let err = PlotRegistry::from_snapshot_json(&json).expect_err("shape mismatch");
    assert!(matches!(err, ChartError::Shape(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = PlotRegistry::from_snapshot_json("{not json").expect_err("bad json");
    assert!(matches!(err, ChartError::Parse(_)));
}
