//! Packet processing errors
//!
//! Every variant ends up as the `{"error": "<message>"}` object at the
//! boundary, so the `Display` text is what consumers see.

use ecosense_core::MetricsError;
use thiserror::Error;

/// Result type for packet processing
pub type SenmlResult<T> = Result<T, SenmlError>;

/// Errors raised while turning a packet into a report
#[derive(Debug, Error)]
pub enum SenmlError {
    /// Payload is not JSON at all
    #[error("Invalid JSON format")]
    InvalidJson(#[source] serde_json::Error),

    /// Payload is JSON but not an array
    #[error("Expected a list of SenML records, got {found}")]
    NotAList {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// An array element could not be read as a SenML record
    #[error("Malformed SenML record at index {index}: {source}")]
    MalformedRecord {
        /// Position of the record in the packet
        index: usize,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Metric derivation failed
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Report could not be encoded
    #[error("Failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),
}
