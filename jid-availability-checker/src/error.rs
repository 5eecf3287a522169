use serde::{Deserialize, Serialize};

/// Unified error type for existence-check operations.
///
/// All variants are serializable for structured error reporting across host
/// boundaries.
///
/// # Expected Errors
///
/// [`JidExists`](Self::JidExists) is the expected business outcome for an
/// HTTP 409 answer and is not a fault; use [`is_expected`](Self::is_expected)
/// to pick the log level.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CheckerError {
    /// The username is already registered under the domain (HTTP 409).
    #[error("{username}@{domain} already exists")]
    JidExists {
        /// Local part that was checked.
        username: String,
        /// Domain the local part was checked under.
        domain: String,
    },

    /// A network-level error occurred (DNS failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a status code outside the contract.
    #[error("Unexpected status {status} from check endpoint")]
    UnexpectedStatus {
        /// HTTP status code as received.
        status: u16,
    },

    /// The endpoint or HTTP client configuration is unusable.
    #[error("Invalid endpoint configuration: {detail}")]
    InvalidEndpoint {
        /// Error details.
        detail: String,
    },
}

impl CheckerError {
    /// Whether this is expected behavior (a business outcome rather than a
    /// fault), used for log classification.
    ///
    /// Level `debug`/`warn` should be used when returning `true` and level
    /// `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::JidExists { .. })
    }
}

/// Result alias for checker operations.
pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jid_exists_is_expected() {
        let err = CheckerError::JidExists {
            username: "bob".to_string(),
            domain: "example.com".to_string(),
        };
        assert!(err.is_expected());
    }

    #[test]
    fn transport_faults_are_unexpected() {
        let errors = [
            CheckerError::NetworkError {
                detail: "connection refused".to_string(),
            },
            CheckerError::Timeout {
                detail: "deadline elapsed".to_string(),
            },
            CheckerError::UnexpectedStatus { status: 500 },
            CheckerError::InvalidEndpoint {
                detail: "relative URL".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.is_expected(), "{err} should be unexpected");
        }
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CheckerError::UnexpectedStatus { status: 503 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"UnexpectedStatus\""));
        assert!(json.contains("\"status\":503"));
    }

    #[test]
    fn display_includes_jid() {
        let err = CheckerError::JidExists {
            username: "bob".to_string(),
            domain: "example.com".to_string(),
        };
        assert_eq!(err.to_string(), "bob@example.com already exists");
    }
}
