//! Alias generation and validation.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const ALIAS_LENGTH_BYTES: usize = 6;

/// Aliases that collide with service routes.
const RESERVED_ALIASES: &[&str] = &["url", "register", "health"];

/// Generates a random candidate alias.
///
/// Uses `getrandom` for entropy and URL-safe base64 without padding,
/// producing an 8-character alias. The store's unique constraint, not this
/// function, guarantees uniqueness.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_alias() -> String {
    let mut buffer = [0u8; ALIAS_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a caller-provided alias.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_requested_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < 3 || alias.len() > 32 {
        return Err(AppError::bad_request(
            "Alias must be 3-32 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens, and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_alias_has_expected_length() {
        assert_eq!(generate_alias().len(), 8);
    }

    #[test]
    fn generated_alias_is_url_safe() {
        let alias = generate_alias();
        assert!(alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!alias.contains('='));
    }

    #[test]
    fn generated_aliases_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(generate_alias());
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn generated_alias_passes_validation() {
        validate_requested_alias(&generate_alias()).unwrap();
    }

    #[test]
    fn validate_accepts_reasonable_aliases() {
        assert!(validate_requested_alias("promo").is_ok());
        assert!(validate_requested_alias("my-link_24").is_ok());
    }

    #[test]
    fn validate_rejects_short_and_long() {
        assert!(validate_requested_alias("ab").is_err());
        assert!(validate_requested_alias(&"a".repeat(33)).is_err());
    }

    #[test]
    fn validate_rejects_bad_characters() {
        assert!(validate_requested_alias("with space").is_err());
        assert!(validate_requested_alias("slash/alias").is_err());
    }

    #[test]
    fn validate_rejects_reserved_names() {
        assert!(validate_requested_alias("register").is_err());
        assert!(validate_requested_alias("url").is_err());
    }
}
