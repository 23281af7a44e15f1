//! Heat Index Coefficients
//!
//! Coefficients of the two NOAA heat index formulas, in the Fahrenheit
//! domain. Values are reproduced exactly from the NWS reference so results
//! stay comparable with published tables.
//!
//! Source: NWS Technical Attachment SR 90-23 (Rothfusz, 1990) and the NWS
//! heat index equation page (Steadman simplification and adjustments)

// ===== STEADMAN (SIMPLE) FORMULA =====
//
// HI = 0.5 × (T + 61.0 + (T − 68.0) × 1.2 + RH × 0.094)

/// Constant offset of the simple formula (°F).
pub const STEADMAN_OFFSET_F: f64 = 61.0;

/// Reference temperature of the simple formula (°F).
pub const STEADMAN_REFERENCE_F: f64 = 68.0;

/// Temperature slope above the reference.
pub const STEADMAN_TEMP_FACTOR: f64 = 1.2;

/// Humidity contribution per %RH.
pub const STEADMAN_RH_FACTOR: f64 = 0.094;

/// Simple-formula results at or above this value switch to the Rothfusz
/// regression (°F).
pub const ROTHFUSZ_THRESHOLD_F: f64 = 80.0;

// ===== ROTHFUSZ REGRESSION =====

/// Intercept.
pub const C1: f64 = -42.379;
/// T
pub const C2: f64 = 2.04901523;
/// RH
pub const C3: f64 = 10.14333127;
/// T·RH
pub const C4: f64 = -0.22475541;
/// T²
pub const C5: f64 = -0.00683783;
/// RH²
pub const C6: f64 = -0.05481717;
/// T²·RH
pub const C7: f64 = 0.00122874;
/// T·RH²
pub const C8: f64 = 0.00085282;
/// T²·RH²
pub const C9: f64 = -0.00000199;

// ===== REGRESSION ADJUSTMENTS =====

/// Below this humidity the low-humidity correction may apply (%RH).
pub const LOW_HUMIDITY_RH_PCT: f64 = 13.0;

/// Temperature window of the low-humidity correction (°F, inclusive).
pub const LOW_HUMIDITY_T_MIN_F: f64 = 80.0;
/// Upper end of the low-humidity window (°F, inclusive).
pub const LOW_HUMIDITY_T_MAX_F: f64 = 112.0;

/// Center of the low-humidity correction curve (°F).
pub const LOW_HUMIDITY_T_CENTER_F: f64 = 95.0;

/// Half-width of the low-humidity correction curve (°F).
pub const LOW_HUMIDITY_SPAN_F: f64 = 17.0;

/// Above this humidity the high-humidity correction may apply (%RH).
pub const HIGH_HUMIDITY_RH_PCT: f64 = 85.0;

/// Temperature window of the high-humidity correction (°F, inclusive).
pub const HIGH_HUMIDITY_T_MIN_F: f64 = 80.0;
/// Upper end of the high-humidity window (°F, inclusive).
pub const HIGH_HUMIDITY_T_MAX_F: f64 = 87.0;
