//! Field configuration and input types

use serde::{Deserialize, Serialize};

/// Default minimum local-part length (characters).
pub const DEFAULT_MIN_LENGTH: usize = 2;
/// Default maximum local-part length (characters).
pub const DEFAULT_MAX_LENGTH: usize = 64;

/// Per-field validation configuration.
///
/// The host reads these from the input element's attributes (or wherever its
/// UI toolkit keeps them) and hands them over at registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Minimum local-part length in characters.
    pub min_length: usize,
    /// Maximum local-part length in characters.
    pub max_length: usize,
    /// Whether this field participates in remote existence checking.
    pub check_existence: bool,
    /// Whether this field registers a new account. Restricts the domain
    /// choices to registration-enabled hosts.
    pub register: bool,
}

impl Default for FieldConfig {
    /// A login-style field: default lengths, no existence check.
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            check_existence: false,
            register: false,
        }
    }
}

impl FieldConfig {
    /// A registration field: domain choices restricted to
    /// registration-enabled hosts, existence checking on.
    #[must_use]
    pub fn registration() -> Self {
        Self {
            check_existence: true,
            register: true,
            ..Self::default()
        }
    }
}

/// Current input of a field, mutated on every host event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    /// Raw local-part text as typed.
    pub local_part: String,
    /// Currently selected domain.
    pub domain: String,
}
