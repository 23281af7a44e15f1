//! End-to-end tests: SenML payload in, dashboard JSON out

use ecosense_core::AlertPolicy;
use ecosense_senml::{encode, process_packet, Processor};
use serde_json::{json, Value};

fn to_json(payload: &str) -> Value {
    serde_json::to_value(process_packet(payload)).expect("outcome always encodes")
}

#[test]
fn test_consolidated_processor_output() {
    let payload = r#"
    [
      {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
      {"n": "temperature", "u": "Cel", "v": 33.0},
      {"n": "humidity", "u": "%RH", "v": 70.0}
    ]
    "#;

    let value = to_json(payload);
    assert_eq!(value["raw_readings"]["pm2.5"], json!(42.5));
    assert_eq!(
        value["derived_metrics"]["air_quality"]["status"],
        json!("Unhealthy for Sensitive Groups")
    );
    assert_eq!(value["derived_metrics"]["heat_index_c"], json!(43.5));
    assert_eq!(
        value["alerts"],
        json!([
            "Air Quality Alert: Unhealthy for Sensitive Groups",
            "Heat Danger Alert"
        ])
    );
}

#[test]
fn test_heat_script_packet() {
    // Packet from the standalone heat index script: 32°C / 65% RH
    let payload = r#"[
      {"bn": "urn:dev:mac:0024befffe804ff1:", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 12.5},
      {"n": "temperature", "u": "Cel", "v": 32.0},
      {"n": "humidity", "u": "%RH", "v": 65.0}
    ]"#;

    let value = to_json(payload);
    assert_eq!(value["derived_metrics"]["air_quality"]["status"], json!("Moderate"));
    assert_eq!(value["derived_metrics"]["heat_index_c"], json!(38.7));
    assert_eq!(value["alerts"], json!([]));

    let cautious = Processor::new(AlertPolicy::default().with_heat_caution(true));
    let value = serde_json::to_value(cautious.process(payload)).unwrap();
    assert_eq!(value["alerts"], json!(["Heat Caution Alert"]));
}

#[test]
fn test_malformed_inputs_yield_only_error() {
    let cases = [
        "",
        "not json",
        "{\"n\": \"pm2.5\"",
        "42",
        "\"pm2.5\"",
        r#"{"n": "pm2.5", "v": 42.5}"#,
        r#"[{"n": "pm2.5", "v": "forty"}]"#,
        "[1, 2, 3]",
    ];

    for payload in cases {
        let value = to_json(payload);
        let object = value.as_object().expect("error shape is an object");
        assert_eq!(object.len(), 1, "payload {payload:?} gave {value}");
        assert!(object.contains_key("error"));
        assert!(!object.contains_key("derived_metrics"));
    }
}

#[test]
fn test_invalid_json_message() {
    assert_eq!(to_json("[{"), json!({"error": "Invalid JSON format"}));
}

#[test]
fn test_temperature_only_packet() {
    let value = to_json(r#"[{"n": "temperature", "u": "Cel", "v": 20.0}]"#);
    assert!(value["derived_metrics"].get("heat_index_c").is_none());
    assert_eq!(value["alerts"], json!([]));
}

#[test]
fn test_string_valued_records_are_ignored() {
    let value = to_json(
        r#"[{"n": "status", "vs": "ok"}, {"n": "pm2.5", "v": 300.0}, {"bn": "dev-2"}]"#,
    );
    assert_eq!(value["raw_readings"], json!({"pm2.5": 300.0}));
    assert_eq!(value["alerts"], json!(["Air Quality Alert: Hazardous"]));
}

#[test]
fn test_duplicate_names_keep_last() {
    let value = to_json(r#"[{"n": "pm2.5", "v": 5.0}, {"n": "pm2.5", "v": 60.0}]"#);
    assert_eq!(value["raw_readings"]["pm2.5"], json!(60.0));
    assert_eq!(value["derived_metrics"]["air_quality"]["status"], json!("Unhealthy"));
}

#[test]
fn test_encode_is_valid_json() {
    let text = encode(&process_packet("garbage"));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, json!({"error": "Invalid JSON format"}));
}

#[test]
fn test_null_values_are_rejected() {
    let payload = r#"[
      {"n": "pm2.5", "v": null},
      {"n": "temperature", "v": 30.0},
      {"n": "humidity", "v": null}
    ]"#;

    let value = to_json(payload);
    let object = value.as_object().expect("error shape is an object");
    assert_eq!(object.len(), 1);
    assert!(object["error"]
        .as_str()
        .is_some_and(|msg| msg.starts_with("Malformed SenML record at index 0")));
}

#[test]
fn test_absent_value_is_not_an_error() {
    let value = to_json(r#"[{"n": "pm2.5"}, {"n": "temperature", "v": 30.0}]"#);
    assert_eq!(value["raw_readings"], json!({"temperature": 30.0}));
    assert_eq!(value["derived_metrics"], json!({}));
}
