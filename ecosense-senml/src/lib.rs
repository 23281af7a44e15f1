//! SenML packet processing for EcoSense
//!
//! Bridges raw telemetry and the pure derivations in `ecosense-core`:
//!
//! 1. **Parse**: JSON payload → [`SenmlRecord`]s ([`parse_records`])
//! 2. **Extract**: records → name/value [`Readings`](ecosense_core::Readings)
//!    ([`extract_readings`])
//! 3. **Derive**: readings → metrics and alerts (`ecosense_core::Aggregator`)
//! 4. **Report**: metrics → dashboard [`Report`] or `{"error": ...}`
//!    ([`Processor`], [`encode`])
//!
//! ```rust
//! use ecosense_senml::process_packet;
//!
//! let payload = r#"[
//!   {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
//!   {"n": "temperature", "u": "Cel", "v": 33.0},
//!   {"n": "humidity", "u": "%RH", "v": 70.0}
//! ]"#;
//!
//! let outcome = process_packet(payload);
//! let report = outcome.report().expect("valid packet");
//! assert_eq!(report.alerts().len(), 2);
//!
//! let rejected = process_packet("not json");
//! assert_eq!(rejected.error(), Some("Invalid JSON format"));
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod extract;
pub mod processor;
pub mod record;

pub use errors::{SenmlError, SenmlResult};
pub use extract::extract_readings;
pub use processor::{encode, process_packet, PacketOutcome, Processor, Report};
pub use record::{parse_records, resolve_frame, Frame, SenmlRecord};
