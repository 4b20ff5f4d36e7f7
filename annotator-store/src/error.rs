use serde::{Deserialize, Serialize};

/// Unified error type for all record store operations.
///
/// Each variant includes a `store` field identifying which store produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent connectivity failures that may succeed when the
/// operator repeats the action:
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, 502/503/504
/// - [`Timeout`](Self::Timeout): request timed out
///
/// Stores never retry on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum StoreError {
    /// A network-level error occurred (connection refused, gateway errors, etc.).
    NetworkError {
        /// Store that produced the error.
        store: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Store that produced the error.
        store: String,
        /// Error details.
        detail: String,
    },

    /// The store answered with a non-success HTTP status.
    Http {
        /// Store that produced the error.
        store: String,
        /// HTTP status code.
        status: u16,
        /// Raw error body from the store, if available.
        raw_message: Option<String>,
    },

    /// A single document addressed by id does not exist.
    NotFound {
        /// Store that produced the error.
        store: String,
        /// Path of the missing document.
        resource: String,
    },

    /// A response or one of its records could not be converted into a typed record.
    MalformedRecord {
        /// Store that produced the error.
        store: String,
        /// Details about the conversion failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Store that produced the error.
        store: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// A store setting is unusable (empty endpoint, zero page size, ...).
    InvalidParameter {
        /// Store that produced the error.
        store: String,
        /// Name of the invalid setting.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl StoreError {
    /// Whether this is expected behavior (missing document, bad setting), used for log grading.
    ///
    /// Returning `true` should log at `warn`, `false` at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Whether the failure is a connectivity problem rather than a bad answer.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { store, detail } => {
                write!(f, "[{store}] Network error: {detail}")
            }
            Self::Timeout { store, detail } => {
                write!(f, "[{store}] Request timeout: {detail}")
            }
            Self::Http {
                store,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{store}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{store}] HTTP {status}")
                }
            }
            Self::NotFound { store, resource } => {
                write!(f, "[{store}] Document '{resource}' not found")
            }
            Self::MalformedRecord { store, detail } => {
                write!(f, "[{store}] Malformed record: {detail}")
            }
            Self::SerializationError { store, detail } => {
                write!(f, "[{store}] Serialization error: {detail}")
            }
            Self::InvalidParameter {
                store,
                param,
                detail,
            } => {
                write!(f, "[{store}] Invalid setting '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = StoreError::NetworkError {
            store: "elasticsearch".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[elasticsearch] Network error: connection refused"
        );
    }

    #[test]
    fn display_http_with_message() {
        let e = StoreError::Http {
            store: "es".to_string(),
            status: 400,
            raw_message: Some("parsing_exception".to_string()),
        };
        assert_eq!(e.to_string(), "[es] HTTP 400: parsing_exception");
    }

    #[test]
    fn display_http_without_message() {
        let e = StoreError::Http {
            store: "es".to_string(),
            status: 401,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[es] HTTP 401");
    }

    #[test]
    fn display_not_found() {
        let e = StoreError::NotFound {
            store: "es".to_string(),
            resource: "demo_twitter/TotalNum/1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[es] Document 'demo_twitter/TotalNum/1' not found"
        );
    }

    #[test]
    fn display_malformed_record() {
        let e = StoreError::MalformedRecord {
            store: "es".to_string(),
            detail: "missing field `text`".to_string(),
        };
        assert_eq!(e.to_string(), "[es] Malformed record: missing field `text`");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = StoreError::InvalidParameter {
            store: "es".to_string(),
            param: "endpoint".to_string(),
            detail: "must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[es] Invalid setting 'endpoint': must not be empty"
        );
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = StoreError::Timeout {
            store: "es".to_string(),
            detail: "30s elapsed".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Timeout\""));
        assert!(json.contains("\"detail\":\"30s elapsed\""));
    }

    #[test]
    fn transient_classification() {
        assert!(
            StoreError::NetworkError {
                store: "t".into(),
                detail: "x".into(),
            }
            .is_transient()
        );
        assert!(
            StoreError::Timeout {
                store: "t".into(),
                detail: "x".into(),
            }
            .is_transient()
        );
        assert!(
            !StoreError::MalformedRecord {
                store: "t".into(),
                detail: "x".into(),
            }
            .is_transient()
        );
        assert!(
            !StoreError::Http {
                store: "t".into(),
                status: 500,
                raw_message: None,
            }
            .is_transient()
        );
    }

    #[test]
    fn expected_classification() {
        assert!(
            StoreError::NotFound {
                store: "t".into(),
                resource: "r".into(),
            }
            .is_expected()
        );
        assert!(
            !StoreError::NetworkError {
                store: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }
}
