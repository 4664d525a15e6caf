//! Destination URL checks and normalization.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates a destination URL and returns its normalized form.
///
/// Only absolute `http`/`https` URLs are accepted. Normalization is whatever
/// the WHATWG parser produces (lowercased host, default port stripped), so
/// equivalent spellings store identically.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the URL contains whitespace, fails
/// to parse, or uses a non-HTTP scheme.
pub fn normalize_destination(raw: &str) -> Result<String, AppError> {
    if raw.contains(char::is_whitespace) {
        return Err(AppError::bad_request(
            "Destination URL cannot contain whitespace",
            json!({ "url": raw }),
        ));
    }

    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request(
            "Invalid destination URL",
            json!({ "url": raw, "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Destination URL must use http or https",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_https_urls() {
        let normalized = normalize_destination("HTTPS://Example.COM/x").unwrap();
        assert_eq!(normalized, "https://example.com/x");
    }

    #[test]
    fn rejects_whitespace() {
        assert!(normalize_destination("https://example.com/a b").is_err());
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(normalize_destination("/just/a/path").is_err());
        assert!(normalize_destination("not a url").is_err());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(normalize_destination("ftp://example.com/file").is_err());
        assert!(normalize_destination("javascript:alert(1)").is_err());
    }
}
