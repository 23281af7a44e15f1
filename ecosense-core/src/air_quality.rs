//! PM2.5 Air Quality Classification
//!
//! ## Background
//!
//! The US EPA publishes concentration breakpoints that split PM2.5 readings
//! into six health categories. Each category has a fixed display color used
//! by dashboards and signage:
//!
//! ```text
//! PM2.5 (µg/m³)       Category                          Color
//! ------------------  --------------------------------  -------
//!        ≤ 12.0       Good                              #00E400
//!  12.0 < c ≤ 35.4    Moderate                          #FFFF00
//!  35.4 < c ≤ 55.4    Unhealthy for Sensitive Groups    #FF7E00
//!  55.4 < c ≤ 150.4   Unhealthy                         #FF0000
//! 150.4 < c ≤ 250.4   Very Unhealthy                    #8F3F97
//! 250.4 < c           Hazardous                         #7E0023
//! ```
//!
//! ## Lookup
//!
//! The table is scanned in ascending order and the first row whose upper
//! bound is ≥ the reading wins. A reading exactly on a boundary therefore
//! falls in the lower (safer) category. There is no lower clamp: zero and
//! negative readings (sensor offset drift) classify as Good.
//!
//! The six-row scan is cheaper than a binary search at this size and keeps
//! the step function obvious.
//!
//! ## Usage
//!
//! ```rust
//! use ecosense_core::air_quality::{classify, AqiCategory};
//!
//! let category = classify(42.5);
//! assert_eq!(category, AqiCategory::UnhealthyForSensitiveGroups);
//! assert_eq!(category.color(), "#FF7E00");
//! assert!(category.is_alerting());
//! ```

use crate::constants::air_quality::{
    COLOR_GOOD, COLOR_HAZARDOUS, COLOR_MODERATE, COLOR_UNHEALTHY, COLOR_USG,
    COLOR_VERY_UNHEALTHY, PM25_BREAKPOINTS,
};

/// EPA AQI category, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AqiCategory {
    /// At most 12.0 µg/m³
    Good = 0,
    /// Up to 35.4 µg/m³
    Moderate = 1,
    /// Up to 55.4 µg/m³
    UnhealthyForSensitiveGroups = 2,
    /// Up to 150.4 µg/m³
    Unhealthy = 3,
    /// Up to 250.4 µg/m³
    VeryUnhealthy = 4,
    /// Above 250.4 µg/m³
    Hazardous = 5,
}

impl AqiCategory {
    /// Human-readable category label
    pub const fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Display color as an uppercase hex string
    pub const fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => COLOR_GOOD,
            AqiCategory::Moderate => COLOR_MODERATE,
            AqiCategory::UnhealthyForSensitiveGroups => COLOR_USG,
            AqiCategory::Unhealthy => COLOR_UNHEALTHY,
            AqiCategory::VeryUnhealthy => COLOR_VERY_UNHEALTHY,
            AqiCategory::Hazardous => COLOR_HAZARDOUS,
        }
    }

    /// Severity index, 0 (Good) through 5 (Hazardous)
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Whether this category warrants an air quality alert
    ///
    /// Everything worse than Moderate does.
    pub const fn is_alerting(&self) -> bool {
        !matches!(self, AqiCategory::Good | AqiCategory::Moderate)
    }
}

impl core::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Inclusive upper bound of this row (µg/m³)
    pub upper_bound: f64,
    /// Category assigned to readings in this row
    pub category: AqiCategory,
}

impl Breakpoint {
    /// Create a breakpoint row
    pub const fn new(upper_bound: f64, category: AqiCategory) -> Self {
        Self { upper_bound, category }
    }
}

/// Ordered breakpoint table
///
/// Rows must be strictly increasing by `upper_bound` and the last row must
/// have an infinite bound. [`BreakpointTable::PM25`] satisfies both.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointTable {
    rows: &'static [Breakpoint],
}

impl BreakpointTable {
    /// US EPA PM2.5 table
    pub const PM25: Self = Self { rows: &PM25_BREAKPOINTS };

    /// Rows in ascending order
    pub fn rows(&self) -> &'static [Breakpoint] {
        self.rows
    }

    /// Find the category for a concentration
    ///
    /// Returns the first row whose bound is ≥ `value`. A NaN compares false
    /// against every bound and falls through to the last row.
    pub fn lookup(&self, value: f64) -> AqiCategory {
        self.rows
            .iter()
            .find(|row| value <= row.upper_bound)
            .or_else(|| self.rows.last())
            .map(|row| row.category)
            .unwrap_or(AqiCategory::Hazardous)
    }
}

/// Classify a PM2.5 concentration (µg/m³)
pub fn classify(pm25: f64) -> AqiCategory {
    let category = BreakpointTable::PM25.lookup(pm25);
    log_debug!("PM2.5 {} µg/m³ classified as {}", pm25, category);
    category
}

/// Air quality metric as reported to consumers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirQuality {
    /// Category label, e.g. "Moderate"
    pub status: &'static str,
    /// Category display color, e.g. "#FFFF00"
    pub color_code: &'static str,
    /// Category the label and color came from
    #[cfg_attr(feature = "serde", serde(skip))]
    pub category: AqiCategory,
}

impl From<AqiCategory> for AirQuality {
    fn from(category: AqiCategory) -> Self {
        Self {
            status: category.label(),
            color_code: category.color(),
            category,
        }
    }
}
