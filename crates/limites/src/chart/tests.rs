use super::*;
use crate::epsdelta::{SampleSet, Tolerance};
use serde_json::{json, Value};

fn config_for(v: f64) -> ChartConfig {
    let samples = SampleSet::new(Tolerance::new(v).unwrap());
    ChartConfig::epsilon_delta(init(), &samples).unwrap()
}

#[test]
fn three_datasets_in_order() {
    let cfg = config_for(1.0);
    let labels: Vec<_> = cfg.data.datasets.iter().map(|d| d.label).collect();
    assert_eq!(labels, vec![CURVE_LABEL, UPPER_LABEL, LOWER_LABEL]);
    assert!(cfg.data.datasets.iter().all(|d| d.data.len() == 100));
    assert_eq!(cfg.dataset(UPPER_LABEL).unwrap().data[0].y, 5.0);
    assert_eq!(cfg.dataset(LOWER_LABEL).unwrap().data[99].y, 3.0);
}

#[test]
fn labels_use_two_decimals() {
    let cfg = config_for(1.0);
    assert_eq!(cfg.data.labels.len(), 100);
    assert_eq!(cfg.data.labels[0], "0.50");
    assert_eq!(cfg.data.labels[1], "0.53");
    assert_eq!(cfg.data.labels[99], "3.47");
}

#[test]
fn json_shape_matches_widget_contract() {
    let v: Value = serde_json::to_value(config_for(0.5)).unwrap();
    assert_eq!(v["type"], "line");
    assert_eq!(v["options"]["animation"], false);
    assert_eq!(v["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(
        v["options"]["plugins"]["tooltip"],
        json!({"mode": "index", "intersect": false})
    );
    assert_eq!(v["options"]["scales"]["x"]["type"], "linear");
    assert_eq!(v["options"]["scales"]["x"]["min"], 0.5);
    assert_eq!(v["options"]["scales"]["x"]["max"], 3.5);
    assert!(v["options"]["scales"]["y"].get("type").is_none());
    assert_eq!(v["options"]["scales"]["y"]["max"], 12.0);
    assert_eq!(v["options"]["scales"]["y"]["title"]["text"], "f(x)");

    let curve = &v["data"]["datasets"][0];
    assert_eq!(curve["borderColor"], "#1F2937");
    assert_eq!(curve["fill"], false);
    assert!(curve.get("borderDash").is_none());
    let band = &v["data"]["datasets"][1];
    assert_eq!(band["borderDash"], json!([5, 5]));
    assert_eq!(band["pointRadius"], 0.0);
    assert_eq!(band["data"][3]["y"], 4.5);
    assert!(band["data"][3]["x"].is_f64());
}

#[test]
fn missing_component_is_reported() {
    let samples = SampleSet::new(Tolerance::initial());
    let registry = Registry::with([ChartComponent::LineElement, ChartComponent::PointElement]);
    assert_eq!(
        ChartConfig::epsilon_delta(&registry, &samples),
        Err(ChartError::Unregistered(ChartComponent::LinearScale))
    );
}

#[test]
fn to_json_matches_serde_and_encode_errors_display() {
    let cfg = config_for(1.0);
    assert_eq!(cfg.to_json().unwrap(), serde_json::to_string(&cfg).unwrap());
    let parsed: Value = serde_json::from_str(&cfg.to_json().unwrap()).unwrap();
    assert_eq!(parsed["type"], "line");

    let mut bad = std::collections::HashMap::new();
    bad.insert(vec![1u8], 1);
    let err = encode_json(&bad).unwrap_err();
    assert!(matches!(err, ChartError::Encode(_)));
    assert!(err.to_string().starts_with("chart data could not be encoded: "));
}
