//! PM2.5 Air Quality Breakpoints
//!
//! Concentration breakpoints (µg/m³, 24-hour average) for the six US EPA
//! AQI categories, with the display color the EPA assigns to each.
//!
//! Source: US EPA Technical Assistance Document for the Reporting of Daily
//! Air Quality (2018 PM2.5 breakpoints)

use crate::air_quality::{AqiCategory, Breakpoint};

/// Upper bound of the Good category (µg/m³).
pub const PM25_GOOD_MAX: f64 = 12.0;

/// Upper bound of the Moderate category (µg/m³).
pub const PM25_MODERATE_MAX: f64 = 35.4;

/// Upper bound of the Unhealthy for Sensitive Groups category (µg/m³).
pub const PM25_USG_MAX: f64 = 55.4;

/// Upper bound of the Unhealthy category (µg/m³).
pub const PM25_UNHEALTHY_MAX: f64 = 150.4;

/// Upper bound of the Very Unhealthy category (µg/m³).
pub const PM25_VERY_UNHEALTHY_MAX: f64 = 250.4;

/// Number of rows in the breakpoint table.
pub const PM25_BREAKPOINT_COUNT: usize = 6;

/// PM2.5 breakpoint table, ascending by upper bound.
///
/// Each row covers `(previous bound, upper_bound]`. The last row is the
/// catch-all with an infinite bound.
pub const PM25_BREAKPOINTS: [Breakpoint; PM25_BREAKPOINT_COUNT] = [
    Breakpoint::new(PM25_GOOD_MAX, AqiCategory::Good),
    Breakpoint::new(PM25_MODERATE_MAX, AqiCategory::Moderate),
    Breakpoint::new(PM25_USG_MAX, AqiCategory::UnhealthyForSensitiveGroups),
    Breakpoint::new(PM25_UNHEALTHY_MAX, AqiCategory::Unhealthy),
    Breakpoint::new(PM25_VERY_UNHEALTHY_MAX, AqiCategory::VeryUnhealthy),
    Breakpoint::new(f64::INFINITY, AqiCategory::Hazardous),
];

// ===== DISPLAY COLORS =====

/// Green
pub const COLOR_GOOD: &str = "#00E400";
/// Yellow
pub const COLOR_MODERATE: &str = "#FFFF00";
/// Orange
pub const COLOR_USG: &str = "#FF7E00";
/// Red
pub const COLOR_UNHEALTHY: &str = "#FF0000";
/// Purple
pub const COLOR_VERY_UNHEALTHY: &str = "#8F3F97";
/// Maroon
pub const COLOR_HAZARDOUS: &str = "#7E0023";
