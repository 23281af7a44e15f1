//! Alert Thresholds
//!
//! Heat thresholds apply to the unrounded heat index in °C.

/// Heat index above which "Heat Danger Alert" is raised (°C, ~104°F).
///
/// Source: NWS heat index chart, "Danger" band lower edge
pub const HEAT_DANGER_THRESHOLD_C: f64 = 40.0;

/// Heat index above which the optional caution alert is raised (°C, ~90°F).
///
/// Only used when the alert policy enables the caution tier.
///
/// Source: NWS heat index chart, "Extreme Caution" band lower edge
pub const HEAT_CAUTION_THRESHOLD_C: f64 = 32.0;

/// Maximum number of alerts one packet can produce.
///
/// One air quality alert plus at most one heat alert, with headroom.
pub const MAX_ALERTS: usize = 4;
