//! Threshold alerts raised while deriving metrics
//!
//! Alerts are collected in evaluation order: the air quality alert (if any)
//! always precedes the heat alert (if any). The list is a fixed-capacity
//! `heapless::Vec`, so raising an alert never allocates.

use core::fmt;

use heapless::Vec;

use crate::air_quality::AqiCategory;
use crate::constants::alerts::MAX_ALERTS;
use crate::errors::{MetricsError, MetricsResult};
use crate::heat_index::HeatRisk;

/// A single alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Air quality worse than Moderate
    AirQuality(AqiCategory),
    /// Heat index above 40°C
    HeatDanger,
    /// Heat index above 32°C (only with [`AlertPolicy::with_heat_caution`])
    HeatCaution,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::AirQuality(category) => write!(f, "Air Quality Alert: {}", category.label()),
            Alert::HeatDanger => f.write_str("Heat Danger Alert"),
            Alert::HeatCaution => f.write_str("Heat Caution Alert"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Alert {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Append-only alert list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alerts {
    items: Vec<Alert, MAX_ALERTS>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Alerts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl Alerts {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert
    pub fn push(&mut self, alert: Alert) -> MetricsResult<()> {
        log_debug!("Raising alert: {}", alert);
        self.items
            .push(alert)
            .map_err(|_| MetricsError::AlertCapacityExceeded { capacity: MAX_ALERTS })
    }

    /// Alerts in the order they were raised
    pub fn as_slice(&self) -> &[Alert] {
        &self.items
    }

    /// Number of alerts
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no alerts were raised
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a given alert was raised
    pub fn contains(&self, alert: &Alert) -> bool {
        self.items.contains(alert)
    }

    /// Iterate in raise order
    pub fn iter(&self) -> core::slice::Iter<'_, Alert> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Alerts {
    type Item = &'a Alert;
    type IntoIter = core::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Which thresholds raise alerts
///
/// The default matches the consolidated processor: air quality alerts for
/// anything worse than Moderate, and a heat alert only above 40°C.
///
/// ```rust
/// use ecosense_core::AlertPolicy;
///
/// // Also warn between 32°C and 40°C
/// let policy = AlertPolicy::default().with_heat_caution(true);
/// assert!(policy.heat_caution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPolicy {
    air_quality: bool,
    heat_danger: bool,
    heat_caution: bool,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            air_quality: true,
            heat_danger: true,
            heat_caution: false,
        }
    }
}

impl AlertPolicy {
    /// Policy that never raises alerts
    pub fn silent() -> Self {
        Self {
            air_quality: false,
            heat_danger: false,
            heat_caution: false,
        }
    }

    /// Enable or disable air quality alerts
    pub fn with_air_quality(mut self, enabled: bool) -> Self {
        self.air_quality = enabled;
        self
    }

    /// Enable or disable the 40°C heat danger alert
    pub fn with_heat_danger(mut self, enabled: bool) -> Self {
        self.heat_danger = enabled;
        self
    }

    /// Enable or disable the 32°C heat caution tier
    pub fn with_heat_caution(mut self, enabled: bool) -> Self {
        self.heat_caution = enabled;
        self
    }

    /// Whether the caution tier is enabled
    pub fn heat_caution(&self) -> bool {
        self.heat_caution
    }

    /// Alert for an air quality category, if one applies
    pub fn air_quality_alert(&self, category: AqiCategory) -> Option<Alert> {
        (self.air_quality && category.is_alerting()).then_some(Alert::AirQuality(category))
    }

    /// Alert for an unrounded heat index (°C), if one applies
    pub fn heat_alert(&self, heat_index_c: f64) -> Option<Alert> {
        match HeatRisk::from_celsius(heat_index_c) {
            HeatRisk::Danger if self.heat_danger => Some(Alert::HeatDanger),
            HeatRisk::Caution if self.heat_caution => Some(Alert::HeatCaution),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn alert_text() {
        assert_eq!(
            Alert::AirQuality(AqiCategory::UnhealthyForSensitiveGroups).to_string(),
            "Air Quality Alert: Unhealthy for Sensitive Groups"
        );
        assert_eq!(Alert::HeatDanger.to_string(), "Heat Danger Alert");
        assert_eq!(Alert::HeatCaution.to_string(), "Heat Caution Alert");
    }

    #[test]
    fn default_policy() {
        let policy = AlertPolicy::default();
        assert_eq!(policy.air_quality_alert(AqiCategory::Good), None);
        assert_eq!(policy.air_quality_alert(AqiCategory::Moderate), None);
        assert_eq!(
            policy.air_quality_alert(AqiCategory::Unhealthy),
            Some(Alert::AirQuality(AqiCategory::Unhealthy))
        );
        assert_eq!(policy.heat_alert(43.47), Some(Alert::HeatDanger));
        assert_eq!(policy.heat_alert(40.0), None);
        assert_eq!(policy.heat_alert(35.0), None);
    }

    #[test]
    fn caution_tier_is_opt_in() {
        let policy = AlertPolicy::default().with_heat_caution(true);
        assert_eq!(policy.heat_alert(35.0), Some(Alert::HeatCaution));
        assert_eq!(policy.heat_alert(32.0), None);
        assert_eq!(policy.heat_alert(41.0), Some(Alert::HeatDanger));
    }

    #[test]
    fn silent_policy() {
        let policy = AlertPolicy::silent();
        assert_eq!(policy.air_quality_alert(AqiCategory::Hazardous), None);
        assert_eq!(policy.heat_alert(60.0), None);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut alerts = Alerts::new();
        for _ in 0..MAX_ALERTS {
            assert!(alerts.push(Alert::HeatDanger).is_ok());
        }
        assert_eq!(
            alerts.push(Alert::HeatDanger),
            Err(MetricsError::AlertCapacityExceeded { capacity: MAX_ALERTS })
        );
        assert_eq!(alerts.len(), MAX_ALERTS);
    }
}
