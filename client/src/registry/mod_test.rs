use super::*;
use serde_json::json;

fn chart_props() -> Value {
    json!({
        "chartType": "bar",
        "title": "AI market size",
        "data": [
            { "label": "2023", "value": 150.0 },
            { "label": "2024", "value": 210.0 }
        ],
        "valuePrefix": "$",
        "valueSuffix": "B"
    })
}

// =============================================================================
// lookup
// =============================================================================

#[test]
fn builtin_has_nine_unique_names_in_fixed_order() {
    let registry = Registry::builtin();
    let names: Vec<&str> = registry.descriptors().iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        vec![
            "ServiceCard",
            "ROICalculator",
            "CaseStudyViewer",
            "ContactForm",
            "TimelineEstimator",
            "TechStackDisplay",
            "ChartDisplay",
            "ComparisonTable",
            "StatsDashboard",
        ]
    );
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
}

#[test]
fn lookup_is_exact_match_on_name() {
    let registry = Registry::builtin();
    assert_eq!(registry.lookup("ChartDisplay").map(|d| d.name), Some("ChartDisplay"));
    assert!(registry.lookup("chartdisplay").is_none());
    assert!(registry.lookup("Unknown").is_none());
}

#[test]
fn every_descriptor_has_object_schema_and_description() {
    for d in Registry::builtin().descriptors() {
        let schema = (d.schema)();
        assert_eq!(schema["type"], "object", "{}", d.name);
        assert!(schema["properties"].is_object(), "{}", d.name);
        assert!(!d.description.is_empty(), "{}", d.name);
    }
}

#[test]
fn chart_description_prefers_charts_over_text() {
    let d = Registry::builtin().lookup("ChartDisplay").expect("registered");
    assert!(d.description.contains("ALWAYS prefer rendering a chart"));
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolve_unknown_component_renders_nothing() {
    assert!(Registry::builtin().resolve("Unknown", &json!({})).is_none());
}

#[test]
fn resolve_decodes_valid_chart_props() {
    let resolved = Registry::builtin().resolve("ChartDisplay", &chart_props());
    let Some(ComponentProps::ChartDisplay(props)) = resolved else {
        panic!("expected chart props, got {resolved:?}");
    };
    assert_eq!(props.data.len(), 2);
    assert_eq!(props.value_prefix.as_deref(), Some("$"));
}

#[test]
fn resolve_rejects_shape_mismatch() {
    let mut props = chart_props();
    props["data"] = json!("not an array");
    assert!(Registry::builtin().resolve("ChartDisplay", &props).is_none());
}

#[test]
fn resolve_rejects_unknown_enum_value() {
    let mut props = chart_props();
    props["chartType"] = json!("scatter");
    assert!(Registry::builtin().resolve("ChartDisplay", &props).is_none());
}

#[test]
fn resolve_rejects_out_of_bounds_arrays() {
    let mut props = chart_props();
    props["data"] = json!([{ "label": "only", "value": 1.0 }]);
    assert!(Registry::builtin().resolve("ChartDisplay", &props).is_none());
}

#[test]
fn decode_props_reports_length_error() {
    let value = json!({ "title": "t", "stats": [{ "label": "a", "value": "1" }] });
    let err = decode_props::<props::StatsDashboardProps>(&value).unwrap_err();
    assert_eq!(err, PropsError::Length { field: "stats", len: 1, min: 2, max: 8 });
}

#[test]
fn resolve_ignores_unknown_keys() {
    let mut props = chart_props();
    props["extra"] = json!({ "anything": true });
    assert!(Registry::builtin().resolve("ChartDisplay", &props).is_some());
}
