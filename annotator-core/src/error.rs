//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use annotator_store::StoreError;

/// Core layer error type
///
/// `EmptyResult` and `StaleCompletion` are not errors here: an empty message
/// list drives user skipping and a stale completion is dropped silently.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The record store could not be reached or answered with unusable data
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or written
    #[error("Config file error: {0}")]
    ConfigIo(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad settings, missing document), used for log grading.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidConfig(_) => true,
            Self::StoreUnavailable(e) => e.is_expected(),
            _ => false,
        }
    }

    /// Whether the store could not be reached; the same action may succeed on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(e) if e.is_transient())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_to_store_unavailable() {
        let err: CoreError = StoreError::NetworkError {
            store: "elasticsearch".to_string(),
            detail: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::StoreUnavailable(_)));
        assert_eq!(
            err.to_string(),
            "Store unavailable: [elasticsearch] Network error: connection refused"
        );
        assert!(!err.is_expected());
    }

    #[test]
    fn malformed_record_is_store_unavailable_class() {
        let err: CoreError = StoreError::MalformedRecord {
            store: "elasticsearch".to_string(),
            detail: "missing text".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::StoreUnavailable(_)));
    }

    #[test]
    fn invalid_config_is_expected() {
        assert!(CoreError::InvalidConfig("usersPageSize".to_string()).is_expected());
        assert!(!CoreError::ConfigIo("denied".to_string()).is_expected());
    }

    #[test]
    fn transient_only_for_connectivity_failures() {
        let timeout: CoreError = StoreError::Timeout {
            store: "elasticsearch".to_string(),
            detail: "30s".to_string(),
        }
        .into();
        let malformed: CoreError = StoreError::MalformedRecord {
            store: "elasticsearch".to_string(),
            detail: "missing text".to_string(),
        }
        .into();
        assert!(timeout.is_transient());
        assert!(!malformed.is_transient());
        assert!(!CoreError::ConfigIo("denied".to_string()).is_transient());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::InvalidConfig("x".to_string())).unwrap();
        assert_eq!(json["code"], "InvalidConfig");
        assert_eq!(json["details"], "x");
    }
}
