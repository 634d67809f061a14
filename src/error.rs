//! Error types for parameter and request validation.
//!
//! The clustering pass itself is total and never fails; these errors are
//! produced only when options or an incoming request are checked before a
//! pass is run.

use thiserror::Error;

/// Result type alias for fallible validation and decoding.
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors raised while validating clustering parameters or decoding a
/// request payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// The request carried no tickets.
    #[error("Invalid input: tickets must be a non-empty list")]
    EmptyTickets,

    /// A ticket is missing its id or carries non-numeric coordinates.
    #[error("Invalid ticket at index {index}: {reason}")]
    InvalidTicket { index: usize, reason: String },

    /// Radius is zero, negative or not a finite number.
    #[error("Invalid radius_km: must be a positive number, got {0}")]
    InvalidRadius(f64),

    /// Radius is outside the range accepted at the request boundary.
    #[error("Invalid radius_km: must be between {min} and {max}, got {value}")]
    RadiusOutOfRange { value: f64, min: f64, max: f64 },

    /// A size parameter is zero.
    #[error("Invalid {field}: must be at least 1, got {value}")]
    InvalidSize { field: &'static str, value: usize },

    /// A size parameter is outside the range accepted at the request boundary.
    #[error("Invalid {field}: must be between {min} and {max}, got {value}")]
    SizeOutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// Minimum cluster size exceeds maximum cluster size.
    #[error("Invalid cluster sizes: min_cluster_size ({min}) exceeds max_cluster_size ({max})")]
    ContradictorySizes { min: usize, max: usize },

    /// The payload could not be decoded or encoded.
    #[error("Malformed payload: {0}")]
    Json(String),
}

impl ClusterError {
    /// Returns `true` for caller mistakes caught by validation, `false` for
    /// payload decoding failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ClusterError::Json(_))
    }
}

impl From<serde_json::Error> for ClusterError {
    fn from(err: serde_json::Error) -> Self {
        ClusterError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ClusterError::RadiusOutOfRange {
                value: 600.0,
                min: 1.0,
                max: 500.0
            }
            .to_string(),
            "Invalid radius_km: must be between 1 and 500, got 600"
        );
        assert_eq!(
            ClusterError::ContradictorySizes { min: 6, max: 3 }.to_string(),
            "Invalid cluster sizes: min_cluster_size (6) exceeds max_cluster_size (3)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ClusterError::EmptyTickets.is_validation());
        assert!(ClusterError::InvalidRadius(-1.0).is_validation());
        assert!(!ClusterError::Json("eof".into()).is_validation());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated");
        let converted = ClusterError::from(err);
        assert!(matches!(converted, ClusterError::Json(_)));
    }
}
