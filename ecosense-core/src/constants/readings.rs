//! Telemetry Reading Names
//!
//! Names as they appear in the `n` field of incoming SenML records.

/// Fine particulate matter concentration (µg/m³).
pub const READING_PM25: &str = "pm2.5";

/// Air temperature (°C).
pub const READING_TEMPERATURE: &str = "temperature";

/// Relative humidity (%RH).
pub const READING_HUMIDITY: &str = "humidity";
