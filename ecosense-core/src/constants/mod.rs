//! Constants for EcoSense Core
//!
//! Every numeric value the derivations depend on lives here, with its source.
//! Breakpoints and regression coefficients are fixed domain constants; they
//! are not configurable at runtime.
//!
//! ## Organization
//!
//! - **Readings**: Names of the telemetry readings the aggregator looks for
//! - **Air Quality**: US EPA PM2.5 breakpoint table
//! - **Heat Index**: Steadman/Rothfusz coefficients and regime limits
//! - **Alerts**: Thresholds and capacity of the alert list
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Reference the standard the value comes from

/// Reading names used as keys in the telemetry mapping.
pub mod readings;

/// US EPA PM2.5 breakpoints and category colors.
pub mod air_quality;

/// Heat index regression coefficients and regime boundaries.
pub mod heat_index;

/// Alert thresholds and alert list capacity.
pub mod alerts;

pub use readings::{READING_HUMIDITY, READING_PM25, READING_TEMPERATURE};

pub use heat_index::{HIGH_HUMIDITY_RH_PCT, LOW_HUMIDITY_RH_PCT, ROTHFUSZ_THRESHOLD_F};

pub use alerts::{HEAT_CAUTION_THRESHOLD_C, HEAT_DANGER_THRESHOLD_C, MAX_ALERTS};
