//! SenML Records (RFC 8428)
//!
//! ## Format
//!
//! A SenML pack is a JSON array of records. Each record carries one reading,
//! and optional base fields that apply to the records after it:
//!
//! ```json
//! [
//!   {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
//!   {"n": "temperature", "u": "Cel", "v": 33.0},
//!   {"n": "humidity", "u": "%RH", "v": 70.0}
//! ]
//! ```
//!
//! | Label | Meaning | Used here |
//! |-------|-----------------------|----------------------------|
//! | `bn`  | base name             | frame metadata only        |
//! | `bt`  | base time (s)         | frame metadata only        |
//! | `n`   | name                  | key of the readings map    |
//! | `u`   | unit                  | passthrough, not used      |
//! | `v`   | numeric value         | value of the readings map  |
//! | `t`   | time offset (s)       | passthrough, not used      |
//!
//! Other labels (`vs`, `vb`, `s`, `ut`, ...) are ignored. A record without
//! both `n` and `v` is not an error; it simply contributes no reading.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{SenmlError, SenmlResult};

/// One SenML record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SenmlRecord {
    /// Base name
    #[serde(default)]
    pub bn: Option<String>,
    /// Base time (seconds)
    #[serde(default)]
    pub bt: Option<f64>,
    /// Name
    #[serde(default)]
    pub n: Option<String>,
    /// Unit
    #[serde(default)]
    pub u: Option<String>,
    /// Numeric value
    ///
    /// Absent is `None`. A `v` that is present must be a number; `null` is
    /// rejected like any other non-numeric value.
    #[serde(default, deserialize_with = "present_number")]
    pub v: Option<f64>,
    /// Time, relative to base time
    #[serde(default)]
    pub t: Option<f64>,
}

impl SenmlRecord {
    /// Name and value, if the record carries both
    pub fn reading(&self) -> Option<(&str, f64)> {
        Some((self.n.as_deref()?, self.v?))
    }
}

/// Base fields shared by the records of a packet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// First base name in the packet
    pub base_name: Option<String>,
    /// First base time in the packet (seconds)
    pub base_time: Option<f64>,
}

/// Parse a JSON payload into SenML records
///
/// The payload must be a JSON array; every element must decode as a record.
pub fn parse_records(payload: &str) -> SenmlResult<Vec<SenmlRecord>> {
    let value: Value = serde_json::from_str(payload).map_err(SenmlError::InvalidJson)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(SenmlError::NotAList {
                found: json_type(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| SenmlError::MalformedRecord { index, source })
        })
        .collect()
}

/// Base name and base time of a packet
///
/// The first record that sets each field wins.
pub fn resolve_frame(records: &[SenmlRecord]) -> Frame {
    Frame {
        base_name: records.iter().find_map(|r| r.bn.clone()),
        base_time: records.iter().find_map(|r| r.bt),
    }
}

fn present_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKET: &str = r#"[
        {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
        {"n": "temperature", "u": "Cel", "v": 33.0},
        {"n": "humidity", "u": "%RH", "v": 70.0}
    ]"#;

    #[test]
    fn parses_full_packet() {
        let records = parse_records(PACKET).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].bn.as_deref(), Some("sensor-01"));
        assert_eq!(records[0].bt, Some(1735418000.0));
        assert_eq!(records[0].reading(), Some(("pm2.5", 42.5)));
        assert_eq!(records[2].u.as_deref(), Some("%RH"));
    }

    #[test]
    fn records_without_value_have_no_reading() {
        let records = parse_records(r#"[{"n": "status", "vs": "ok"}, {"v": 1.0}]"#).unwrap();
        assert_eq!(records[0].reading(), None);
        assert_eq!(records[1].reading(), None);
    }

    #[test]
    fn integer_values_are_accepted() {
        let records = parse_records(r#"[{"n": "humidity", "v": 70}]"#).unwrap();
        assert_eq!(records[0].reading(), Some(("humidity", 70.0)));
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_records("not json").unwrap_err();
        assert!(matches!(err, SenmlError::InvalidJson(_)));
        assert_eq!(err.to_string(), "Invalid JSON format");
    }

    #[test]
    fn rejects_non_list() {
        let err = parse_records(r#"{"n": "pm2.5", "v": 3.0}"#).unwrap_err();
        assert!(matches!(err, SenmlError::NotAList { found: "object" }));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let err = parse_records(r#"[{"n": "pm2.5", "v": 1.0}, {"n": "humidity", "v": "high"}]"#)
            .unwrap_err();
        assert!(matches!(err, SenmlError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn rejects_null_value() {
        let err = parse_records(r#"[{"n": "temperature", "v": 30.0}, {"n": "pm2.5", "v": null}]"#)
            .unwrap_err();
        assert!(matches!(err, SenmlError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn rejects_non_object_element() {
        let err = parse_records("[42]").unwrap_err();
        assert!(matches!(err, SenmlError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn frame_uses_first_base_fields() {
        let records = parse_records(PACKET).unwrap();
        let frame = resolve_frame(&records);
        assert_eq!(frame.base_name.as_deref(), Some("sensor-01"));
        assert_eq!(frame.base_time, Some(1735418000.0));

        assert_eq!(resolve_frame(&[]), Frame::default());
    }
}
