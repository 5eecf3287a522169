//! Validation state types

use serde::{Deserialize, Serialize};

/// Why local syntax validation rejected an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxViolation {
    /// Below the configured minimum length.
    TooShort {
        /// Configured minimum (characters).
        min_length: usize,
        /// Actual input length (characters).
        actual: usize,
    },
    /// Above the configured maximum length.
    TooLong {
        /// Configured maximum (characters).
        max_length: usize,
        /// Actual input length (characters).
        actual: usize,
    },
    /// The input contains `@` or whitespace, which can never appear in a
    /// local part.
    ForbiddenCharacter,
    /// The selected domain is not offered by this deployment (or is closed
    /// for registration on a registering field).
    UnknownDomain {
        /// The rejected domain.
        domain: String,
    },
}

/// Validation state of a username field.
///
/// Exactly one value at a time per field instance; drives the display data
/// the host renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ValidationState {
    /// No input yet, or the field was reset.
    Untouched,
    /// Local syntax validation failed; no remote check is made.
    SyntaxInvalid {
        /// The concrete rule that failed.
        violation: SyntaxViolation,
    },
    /// Syntax passed; a debounced existence check is scheduled or in flight.
    Pending,
    /// The JID can be registered (or syntax passed with checking disabled).
    Available,
    /// The JID is already registered.
    Taken,
    /// The existence check failed for a reason other than a conflict.
    Error,
}
