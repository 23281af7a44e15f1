//! Error Types for Metric Derivation
//!
//! ## Error Taxonomy
//!
//! Derivation can fail in only a few ways, and none of them are retryable:
//! the computation is pure, so the same input always fails the same way.
//!
//! ### Missing Readings
//! Not an error. When `pm2.5` is absent the air quality metric is skipped;
//! when either `temperature` or `humidity` is absent the heat index is
//! skipped. See [`crate::metrics::aggregate`].
//!
//! ### Invalid Readings
//! - `NonFiniteReading`: A required reading is NaN or infinite. Classifying
//!   NaN would silently land in the catch-all category, so it is rejected.
//!
//! ### Internal Failures
//! - `NonFiniteResult`: A formula produced NaN or infinity from finite input
//!   (extreme, physically meaningless temperatures).
//! - `AlertCapacityExceeded`: More alerts than the fixed alert list holds.
//!
//! Any of these aborts the whole derivation. Callers never see partial
//! metrics alongside an error.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use ecosense_core::{aggregate, MetricsError, Readings};
//!
//! let mut readings = Readings::new();
//! readings.insert("pm2.5", f64::NAN);
//!
//! match aggregate(&readings) {
//!     Ok(metrics) => { /* hand to the formatter */ }
//!     Err(MetricsError::NonFiniteReading { name }) => {
//!         // Sensor sent garbage for `name`
//!     }
//!     Err(_) => {
//!         // Report the generic error shape
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for metric derivation
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Derivation errors - `Copy` and allocation free
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MetricsError {
    /// A required reading is NaN or infinite
    #[error("Reading '{name}' is not a finite number")]
    NonFiniteReading {
        /// Name of the offending reading
        name: &'static str,
    },

    /// A derived value came out NaN or infinite
    #[error("Derived metric '{metric}' is not a finite number")]
    NonFiniteResult {
        /// Name of the metric being derived
        metric: &'static str,
    },

    /// Alert list is full
    #[error("Alert capacity exceeded (max {capacity})")]
    AlertCapacityExceeded {
        /// Fixed capacity of the alert list
        capacity: usize,
    },
}
