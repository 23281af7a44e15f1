//! Heat Index ("Feels Like") Calculation
//!
//! ## Background
//!
//! The heat index estimates how hot humid air feels to a person. High
//! humidity slows evaporative cooling from skin, so 33°C at 70% RH feels
//! far hotter than 33°C in dry air.
//!
//! The NWS computes it in two regimes, both defined in Fahrenheit:
//!
//! ### 1. Steadman approximation (mild conditions)
//! ```text
//! HI = 0.5 × (T + 61.0 + (T − 68.0) × 1.2 + RH × 0.094)
//! ```
//! Used as-is when the result is below 80°F.
//!
//! ### 2. Rothfusz regression (hot conditions)
//! ```text
//! HI = −42.379 + 2.04901523·T + 10.14333127·RH − 0.22475541·T·RH
//!      − 0.00683783·T² − 0.05481717·RH² + 0.00122874·T²·RH
//!      + 0.00085282·T·RH² − 0.00000199·T²·RH²
//! ```
//! Replaces the simple value when that value reaches 80°F, followed by at
//! most one boundary correction:
//!
//! ```text
//! RH < 13%  and 80 ≤ T ≤ 112:  HI −= ((13 − RH)/4) × √((17 − |T − 95|)/17)
//! RH > 85%  and 80 ≤ T ≤ 87:   HI += ((RH − 85)/10) × ((87 − T)/5)
//! ```
//!
//! Inside the low-humidity window `|T − 95| ≤ 17`, so the square root
//! argument is never negative there. It is still clamped at zero.
//!
//! ## Input Domain
//!
//! Humidity is expected in 0–100% but out-of-range values are evaluated
//! anyway, with a warning logged. Readings are not validated here; the
//! aggregator rejects non-finite inputs.
//!
//! ## Usage
//!
//! ```rust
//! use ecosense_core::heat_index::{heat_index, HeatIndex, HeatIndexRegime};
//!
//! let hi = HeatIndex::compute(40.0, 10.0);
//! assert_eq!(hi.regime, HeatIndexRegime::LowHumidityAdjusted);
//!
//! // Mild day: Steadman value is used directly
//! assert!((heat_index(20.0, 50.0) - 19.36).abs() < 0.01);
//! ```

use crate::constants::alerts::{HEAT_CAUTION_THRESHOLD_C, HEAT_DANGER_THRESHOLD_C};
use crate::constants::heat_index::*;
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Which branch of the heat index formula produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatIndexRegime {
    /// Steadman approximation, result below 80°F
    Simple,
    /// Rothfusz regression with no correction
    Rothfusz,
    /// Rothfusz regression minus the low-humidity correction
    LowHumidityAdjusted,
    /// Rothfusz regression plus the high-humidity correction
    HighHumidityAdjusted,
}

/// Heat index result with the regime that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatIndex {
    /// Heat index (°C), unrounded
    pub celsius: f64,
    /// Formula branch used
    pub regime: HeatIndexRegime,
}

impl HeatIndex {
    /// Compute the heat index from air temperature (°C) and relative humidity (%)
    pub fn compute(temp_c: f64, humidity_pct: f64) -> Self {
        if !(0.0..=100.0).contains(&humidity_pct) {
            log_warn!(
                "Heat index: humidity {}% outside 0-100%, evaluating anyway",
                humidity_pct
            );
        }

        let (hi_f, regime) = heat_index_f(celsius_to_fahrenheit(temp_c), humidity_pct);
        log_debug!(
            "Heat index: T={}°C RH={}% -> {}°F via {:?}",
            temp_c, humidity_pct, hi_f, regime
        );

        Self {
            celsius: fahrenheit_to_celsius(hi_f),
            regime,
        }
    }

    /// Heat risk tier of this value
    pub fn risk(&self) -> HeatRisk {
        HeatRisk::from_celsius(self.celsius)
    }
}

/// Heat index (°C) for air temperature (°C) and relative humidity (%)
pub fn heat_index(temp_c: f64, humidity_pct: f64) -> f64 {
    HeatIndex::compute(temp_c, humidity_pct).celsius
}

/// Heat index in the Fahrenheit domain
///
/// Takes temperature in °F and humidity in %RH, returns the heat index in
/// °F together with the formula branch that produced it.
pub fn heat_index_f(t: f64, rh: f64) -> (f64, HeatIndexRegime) {
    let simple = steadman(t, rh);
    if simple < ROTHFUSZ_THRESHOLD_F {
        return (simple, HeatIndexRegime::Simple);
    }

    let hi = rothfusz(t, rh);

    if rh < LOW_HUMIDITY_RH_PCT && (LOW_HUMIDITY_T_MIN_F..=LOW_HUMIDITY_T_MAX_F).contains(&t) {
        (hi - low_humidity_adjustment(t, rh), HeatIndexRegime::LowHumidityAdjusted)
    } else if rh > HIGH_HUMIDITY_RH_PCT
        && (HIGH_HUMIDITY_T_MIN_F..=HIGH_HUMIDITY_T_MAX_F).contains(&t)
    {
        (hi + high_humidity_adjustment(t, rh), HeatIndexRegime::HighHumidityAdjusted)
    } else {
        (hi, HeatIndexRegime::Rothfusz)
    }
}

/// Steadman simple formula (°F)
fn steadman(t: f64, rh: f64) -> f64 {
    0.5 * (t + STEADMAN_OFFSET_F + (t - STEADMAN_REFERENCE_F) * STEADMAN_TEMP_FACTOR
        + rh * STEADMAN_RH_FACTOR)
}

/// Rothfusz regression without corrections (°F)
fn rothfusz(t: f64, rh: f64) -> f64 {
    let t2 = t * t;
    let rh2 = rh * rh;

    C1 + C2 * t + C3 * rh + C4 * t * rh + C5 * t2 + C6 * rh2 + C7 * t2 * rh + C8 * t * rh2
        + C9 * t2 * rh2
}

/// Amount subtracted in the low-humidity window (°F)
fn low_humidity_adjustment(t: f64, rh: f64) -> f64 {
    let spread = (LOW_HUMIDITY_SPAN_F - libm::fabs(t - LOW_HUMIDITY_T_CENTER_F)) / LOW_HUMIDITY_SPAN_F;
    ((LOW_HUMIDITY_RH_PCT - rh) / 4.0) * libm::sqrt(spread.max(0.0))
}

/// Amount added in the high-humidity window (°F)
fn high_humidity_adjustment(t: f64, rh: f64) -> f64 {
    ((rh - HIGH_HUMIDITY_RH_PCT) / 10.0) * ((HIGH_HUMIDITY_T_MAX_F - t) / 5.0)
}

/// Heat risk tier of a heat index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeatRisk {
    /// At or below 32°C
    Normal,
    /// Above 32°C, up to and including 40°C
    Caution,
    /// Above 40°C
    Danger,
}

impl HeatRisk {
    /// Tier for an unrounded heat index (°C)
    pub fn from_celsius(heat_index_c: f64) -> Self {
        if heat_index_c > HEAT_DANGER_THRESHOLD_C {
            HeatRisk::Danger
        } else if heat_index_c > HEAT_CAUTION_THRESHOLD_C {
            HeatRisk::Caution
        } else {
            HeatRisk::Normal
        }
    }
}
