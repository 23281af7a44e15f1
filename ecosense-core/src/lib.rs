//! Derived environmental metrics for EcoSense
//!
//! Turns a packet's raw sensor readings into two human-meaningful
//! indicators:
//!
//! - **Air quality**: US EPA category and display color from PM2.5
//! - **Heat index**: perceived temperature from air temperature and humidity
//!
//! and raises threshold alerts on both.
//!
//! Everything here is a pure function over in-memory values. There is no I/O,
//! no shared mutable state and no state kept between calls, so the crate is
//! safe to use from any number of threads. Parsing telemetry and encoding
//! results is left to `ecosense-senml`.
//!
//! ```no_run
//! use ecosense_core::{aggregate, Readings};
//!
//! let mut readings = Readings::new();
//! readings.insert("pm2.5", 42.5);
//! readings.insert("temperature", 33.0);
//! readings.insert("humidity", 70.0);
//!
//! match aggregate(&readings) {
//!     Ok(metrics) => {
//!         for alert in &metrics.alerts {
//!             // notify(alert);
//!         }
//!     }
//!     Err(e) => {} // Report the error shape, never partial metrics
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod air_quality;
pub mod alerts;
pub mod constants;
pub mod errors;
pub mod heat_index;
pub mod metrics;
pub mod readings;
pub mod units;

// Public API
pub use air_quality::{classify, AirQuality, AqiCategory};
pub use alerts::{Alert, AlertPolicy, Alerts};
pub use errors::{MetricsError, MetricsResult};
pub use heat_index::{heat_index, HeatIndex, HeatIndexRegime, HeatRisk};
pub use metrics::{aggregate, Aggregator, DerivedMetrics};
pub use readings::Readings;
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
