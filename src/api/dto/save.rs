//! DTOs for the alias save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a destination URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveAliasRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen alias; a random one is generated when absent.
    #[validate(length(min = 3, max = 32))]
    pub alias: Option<String>,

    /// Optional resolution quota; falls back to the configured default.
    #[validate(range(min = 0))]
    pub max_uses: Option<i64>,
}

/// Response for a successfully saved alias.
#[derive(Debug, Serialize)]
pub struct SaveAliasResponse {
    pub id: i64,
    pub alias: String,
}
