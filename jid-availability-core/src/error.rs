//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use jid_availability_checker::CheckerError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No field registered under the given id
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Widget or field configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Whether it is expected behavior (host wiring races, field already
    /// removed) used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FieldNotFound(_) => true,
            Self::InvalidConfig(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_not_found_is_expected() {
        assert!(CoreError::FieldNotFound("username".to_string()).is_expected());
        assert!(!CoreError::InvalidConfig("min > max".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::FieldNotFound("id_username".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"FieldNotFound\""));
        assert!(json.contains("id_username"));
    }
}
