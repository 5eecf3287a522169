//! Local-part syntax validation.
//!
//! Validates the local part of a JID according to these rules:
//! - Length within the field's configured bounds (counted in characters,
//!   not bytes)
//! - No `@` and no whitespace anywhere in the value
//!
//! Anything else is allowed; the account backend applies its own stricter
//! policies on submit. This check only decides whether a remote existence
//! check is worth issuing.

use crate::types::{FieldConfig, SyntaxViolation};

/// Validate a local part against the field's configured rules.
///
/// # Examples
///
/// ```
/// use jid_availability_core::types::FieldConfig;
/// use jid_availability_core::validation::validate_local_part;
///
/// let config = FieldConfig::default();
/// assert!(validate_local_part("bob", &config).is_ok());
/// assert!(validate_local_part("a", &config).is_err()); // too short
/// assert!(validate_local_part("user@host", &config).is_err()); // forbidden
/// ```
pub fn validate_local_part(value: &str, config: &FieldConfig) -> Result<(), SyntaxViolation> {
    let length = value.chars().count();

    if length < config.min_length {
        return Err(SyntaxViolation::TooShort {
            min_length: config.min_length,
            actual: length,
        });
    }

    if length > config.max_length {
        return Err(SyntaxViolation::TooLong {
            max_length: config.max_length,
            actual: length,
        });
    }

    if value.chars().any(|c| c == '@' || c.is_whitespace()) {
        return Err(SyntaxViolation::ForbiddenCharacter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    #[test]
    fn valid_simple_username() {
        assert!(validate_local_part("bob", &config()).is_ok());
    }

    #[test]
    fn valid_at_min_length() {
        assert!(validate_local_part("ab", &config()).is_ok());
    }

    #[test]
    fn valid_at_max_length() {
        let value = "a".repeat(64);
        assert!(validate_local_part(&value, &config()).is_ok());
    }

    #[test]
    fn empty_is_too_short() {
        let result = validate_local_part("", &config());
        assert_eq!(
            result,
            Err(SyntaxViolation::TooShort {
                min_length: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn single_char_is_too_short() {
        let result = validate_local_part("a", &config());
        assert_eq!(
            result,
            Err(SyntaxViolation::TooShort {
                min_length: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn over_max_is_too_long() {
        let value = "a".repeat(65);
        let result = validate_local_part(&value, &config());
        assert_eq!(
            result,
            Err(SyntaxViolation::TooLong {
                max_length: 64,
                actual: 65
            })
        );
    }

    #[test]
    fn at_sign_is_forbidden() {
        assert_eq!(
            validate_local_part("user@host", &config()),
            Err(SyntaxViolation::ForbiddenCharacter)
        );
    }

    #[test]
    fn whitespace_is_forbidden() {
        for value in ["john doe", "john\tdoe", "john\u{a0}doe", " bob", "bob "] {
            assert_eq!(
                validate_local_part(value, &config()),
                Err(SyntaxViolation::ForbiddenCharacter),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_ascii_is_allowed() {
        assert!(validate_local_part("josé", &config()).is_ok());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Two chars, four bytes; must pass a min_length of 2.
        assert!(validate_local_part("éé", &config()).is_ok());
    }

    #[test]
    fn length_checked_before_characters() {
        // A one-char forbidden input reports the length problem first,
        // matching the order the rules are announced to the user.
        assert!(matches!(
            validate_local_part("@", &config()),
            Err(SyntaxViolation::TooShort { .. })
        ));
    }

    #[test]
    fn custom_bounds_are_honored() {
        let config = FieldConfig {
            min_length: 5,
            ..FieldConfig::default()
        };
        assert!(validate_local_part("bob", &config).is_err());
        assert!(validate_local_part("bobby", &config).is_ok());
    }
}
