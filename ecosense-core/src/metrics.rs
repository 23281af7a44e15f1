//! Derived Metrics Aggregation
//!
//! ## Overview
//!
//! The aggregator turns one packet's readings into derived metrics. Each
//! calculator runs only when its inputs are present:
//!
//! ```text
//! readings ──┬── "pm2.5" ─────────────────→ classify ───→ air_quality
//!            │                                  └──────→ alert (worse than Moderate)
//!            └── "temperature" + "humidity" → heat_index → heat_index_c (1 decimal)
//!                                                └──────→ alert (unrounded > 40°C)
//! ```
//!
//! A missing input is not an error; the metric and its alert are simply
//! absent. Air quality is always evaluated first, so its alert precedes the
//! heat alert.
//!
//! ## Failure Semantics
//!
//! Derivation is all or nothing. A non-finite input or output aborts with a
//! [`MetricsError`] and no metrics are returned.
//!
//! ## Usage
//!
//! ```rust
//! use ecosense_core::{aggregate, Readings};
//!
//! let readings: Readings = [("pm2.5", 42.5), ("temperature", 33.0), ("humidity", 70.0)]
//!     .into_iter()
//!     .collect();
//!
//! let metrics = aggregate(&readings)?;
//! assert_eq!(metrics.air_quality.map(|aq| aq.status), Some("Unhealthy for Sensitive Groups"));
//! assert_eq!(metrics.heat_index_c, Some(43.5));
//! assert_eq!(metrics.alerts.len(), 2);
//! # Ok::<(), ecosense_core::MetricsError>(())
//! ```

use alloc::format;

use crate::{
    air_quality::{classify, AirQuality},
    alerts::{AlertPolicy, Alerts},
    constants::readings::{READING_HUMIDITY, READING_PM25, READING_TEMPERATURE},
    errors::{MetricsError, MetricsResult},
    heat_index::HeatIndex,
    readings::Readings,
};

/// Metrics derived from one packet
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedMetrics {
    /// Air quality category, present when `pm2.5` was reported
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub air_quality: Option<AirQuality>,

    /// Heat index in °C rounded to one decimal, present when both
    /// `temperature` and `humidity` were reported
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub heat_index_c: Option<f64>,

    /// Unrounded heat index and the formula branch that produced it
    #[cfg_attr(feature = "serde", serde(skip))]
    pub heat_index: Option<HeatIndex>,

    /// Alerts in evaluation order
    #[cfg_attr(feature = "serde", serde(skip))]
    pub alerts: Alerts,
}

/// Runs the calculators over a packet's readings
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    policy: AlertPolicy,
}

impl Aggregator {
    /// Aggregator with a custom alert policy
    pub fn new(policy: AlertPolicy) -> Self {
        Self { policy }
    }

    /// Alert policy in use
    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Derive all metrics whose inputs are present
    pub fn aggregate(&self, readings: &Readings) -> MetricsResult<DerivedMetrics> {
        let mut metrics = DerivedMetrics::default();

        if let Some(pm25) = readings.get(READING_PM25) {
            let category = classify(finite(READING_PM25, pm25)?);
            metrics.air_quality = Some(AirQuality::from(category));

            if let Some(alert) = self.policy.air_quality_alert(category) {
                metrics.alerts.push(alert)?;
            }
        }

        if let (Some(temp), Some(humidity)) =
            (readings.get(READING_TEMPERATURE), readings.get(READING_HUMIDITY))
        {
            let hi = HeatIndex::compute(
                finite(READING_TEMPERATURE, temp)?,
                finite(READING_HUMIDITY, humidity)?,
            );
            if !hi.celsius.is_finite() {
                log_warn!("Heat index diverged for T={} RH={}", temp, humidity);
                return Err(MetricsError::NonFiniteResult { metric: "heat_index_c" });
            }

            metrics.heat_index_c = Some(round_to_tenth(hi.celsius));
            metrics.heat_index = Some(hi);

            // Thresholds apply to the unrounded value
            if let Some(alert) = self.policy.heat_alert(hi.celsius) {
                metrics.alerts.push(alert)?;
            }
        }

        Ok(metrics)
    }
}

/// Derive metrics with the default alert policy
pub fn aggregate(readings: &Readings) -> MetricsResult<DerivedMetrics> {
    Aggregator::default().aggregate(readings)
}

fn finite(name: &'static str, value: f64) -> MetricsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log_warn!("Reading '{}' is not finite: {}", name, value);
        Err(MetricsError::NonFiniteReading { name })
    }
}

/// Nearest tenth of the exact binary value, ties to even
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
