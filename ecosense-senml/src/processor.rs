//! Packet Processing
//!
//! ## Flow
//!
//! ```text
//! payload ──→ parse_records ──→ extract_readings ──→ Aggregator ──→ Report
//!    │              │                                     │
//!    └──────────────┴──── any error ──────────────────────┴──→ {"error": "..."}
//! ```
//!
//! ## Output Shapes
//!
//! A successful packet produces the dashboard report:
//!
//! ```json
//! {
//!   "raw_readings": {"humidity": 70.0, "pm2.5": 42.5, "temperature": 33.0},
//!   "derived_metrics": {
//!     "air_quality": {"status": "Unhealthy for Sensitive Groups", "color_code": "#FF7E00"},
//!     "heat_index_c": 43.5
//!   },
//!   "alerts": ["Air Quality Alert: Unhealthy for Sensitive Groups", "Heat Danger Alert"]
//! }
//! ```
//!
//! Any failure produces a single-key object instead. The two shapes never
//! mix; a failure carries no readings or metrics.
//!
//! ```json
//! {"error": "Invalid JSON format"}
//! ```

use ecosense_core::{Aggregator, AlertPolicy, Alerts, DerivedMetrics, Readings};
use log::{debug, warn};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::errors::{SenmlError, SenmlResult};
use crate::extract::extract_readings;
use crate::record::{parse_records, resolve_frame, Frame};

/// Dashboard report for one packet
///
/// Alerts live in `derived_metrics` and are lifted to the top level of the
/// encoded report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Every `n → v` reading in the packet
    pub raw_readings: Readings,
    /// Metrics whose inputs were present, and their alerts
    pub derived_metrics: DerivedMetrics,
    /// Base name/time of the packet
    pub frame: Frame,
}

impl Report {
    /// Alerts in evaluation order
    pub fn alerts(&self) -> &Alerts {
        &self.derived_metrics.alerts
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Report", 3)?;
        state.serialize_field("raw_readings", &self.raw_readings)?;
        state.serialize_field("derived_metrics", &self.derived_metrics)?;
        state.serialize_field("alerts", self.alerts())?;
        state.end()
    }
}

/// Result of processing a packet, as handed to consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PacketOutcome {
    /// Packet was processed
    Report(Report),
    /// Packet was rejected
    Failure {
        /// Human-readable reason
        error: String,
    },
}

impl PacketOutcome {
    /// Whether this is the error shape
    pub fn is_error(&self) -> bool {
        matches!(self, PacketOutcome::Failure { .. })
    }

    /// The report, if processing succeeded
    pub fn report(&self) -> Option<&Report> {
        match self {
            PacketOutcome::Report(report) => Some(report),
            PacketOutcome::Failure { .. } => None,
        }
    }

    /// The error message, if processing failed
    pub fn error(&self) -> Option<&str> {
        match self {
            PacketOutcome::Report(_) => None,
            PacketOutcome::Failure { error } => Some(error),
        }
    }
}

impl From<SenmlResult<Report>> for PacketOutcome {
    fn from(result: SenmlResult<Report>) -> Self {
        match result {
            Ok(report) => PacketOutcome::Report(report),
            Err(err) => PacketOutcome::Failure {
                error: err.to_string(),
            },
        }
    }
}

/// Turns SenML payloads into reports
///
/// ```rust
/// use ecosense_senml::Processor;
///
/// let processor = Processor::default();
/// let outcome = processor.process(r#"[{"n": "pm2.5", "v": 8.0}]"#);
/// let report = outcome.report().unwrap();
/// assert_eq!(report.derived_metrics.air_quality.unwrap().status, "Good");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Processor {
    aggregator: Aggregator,
}

impl Processor {
    /// Processor with a custom alert policy
    pub fn new(policy: AlertPolicy) -> Self {
        Self {
            aggregator: Aggregator::new(policy),
        }
    }

    /// Process a payload, returning the report or the error
    pub fn try_process(&self, payload: &str) -> SenmlResult<Report> {
        let records = parse_records(payload)?;
        let frame = resolve_frame(&records);
        let raw_readings = extract_readings(&records);

        let derived_metrics = self.aggregator.aggregate(&raw_readings)?;

        debug!(
            "Processed packet from {:?}: {} readings, {} alerts",
            frame.base_name,
            raw_readings.len(),
            derived_metrics.alerts.len()
        );

        Ok(Report {
            raw_readings,
            derived_metrics,
            frame,
        })
    }

    /// Process a payload into either shape
    pub fn process(&self, payload: &str) -> PacketOutcome {
        let result = self.try_process(payload);
        if let Err(err) = &result {
            warn!("Rejected packet: {}", err);
        }
        result.into()
    }

    /// Process a payload and encode the outcome as pretty-printed JSON
    pub fn process_to_json(&self, payload: &str) -> String {
        encode(&self.process(payload))
    }
}

/// Process a payload with the default alert policy
pub fn process_packet(payload: &str) -> PacketOutcome {
    Processor::default().process(payload)
}

/// Encode an outcome, falling back to the error shape if encoding fails
pub fn encode(outcome: &PacketOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|err| {
        let err = SenmlError::Encode(err);
        warn!("{}", err);
        serde_json::json!({ "error": err.to_string() }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosense_core::{Alert, AqiCategory};
    use serde_json::{json, Value};

    const HOT_SMOKY: &str = r#"[
        {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
        {"n": "temperature", "u": "Cel", "v": 33.0},
        {"n": "humidity", "u": "%RH", "v": 70.0}
    ]"#;

    #[test]
    fn report_fields() {
        let report = Processor::default().try_process(HOT_SMOKY).unwrap();
        assert_eq!(report.raw_readings.len(), 3);
        assert_eq!(report.derived_metrics.heat_index_c, Some(43.5));
        assert_eq!(report.alerts(), &report.derived_metrics.alerts);
        assert_eq!(
            report.alerts().as_slice(),
            &[
                Alert::AirQuality(AqiCategory::UnhealthyForSensitiveGroups),
                Alert::HeatDanger
            ]
        );
        assert_eq!(report.frame.base_name.as_deref(), Some("sensor-01"));
    }

    #[test]
    fn report_json_shape() {
        let value = serde_json::to_value(process_packet(HOT_SMOKY)).unwrap();
        assert_eq!(
            value,
            json!({
                "raw_readings": {"pm2.5": 42.5, "temperature": 33.0, "humidity": 70.0},
                "derived_metrics": {
                    "air_quality": {
                        "status": "Unhealthy for Sensitive Groups",
                        "color_code": "#FF7E00"
                    },
                    "heat_index_c": 43.5
                },
                "alerts": [
                    "Air Quality Alert: Unhealthy for Sensitive Groups",
                    "Heat Danger Alert"
                ]
            })
        );
    }

    #[test]
    fn error_shape_has_only_error_key() {
        let value = serde_json::to_value(process_packet("{not json")).unwrap();
        assert_eq!(value, json!({"error": "Invalid JSON format"}));
    }

    #[test]
    fn non_list_is_error_shape() {
        let outcome = process_packet(r#"{"n": "pm2.5", "v": 1.0}"#);
        assert!(outcome.is_error());
        assert!(outcome.report().is_none());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value.as_object().map(|o| o.len()), Some(1));
    }

    #[test]
    fn missing_metrics_are_omitted() {
        let value = serde_json::to_value(process_packet(r#"[{"n": "temperature", "v": 20.0}]"#))
            .unwrap();
        assert_eq!(value["derived_metrics"], json!({}));
        assert_eq!(value["alerts"], json!([]));
        assert_eq!(value.get("error"), None::<&Value>);
    }

    #[test]
    fn encode_produces_json_text() {
        let text = Processor::default().process_to_json("[]");
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({"raw_readings": {}, "derived_metrics": {}, "alerts": []})
        );
    }
}
