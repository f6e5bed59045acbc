//! Bearer credential extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Error when extracting a bearer credential
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// Header absent, not valid ASCII, or not a `Bearer` credential
    #[error("Missing bearer credential")]
    Missing,

    /// `Bearer` scheme present but the token part is empty
    #[error("Empty bearer token")]
    Empty,
}

/// Extract the token part of a `Bearer` authorization header
///
/// ## Returns
/// * `Ok(&str)` - the token after `"Bearer "`, with surrounding whitespace removed
/// * `Err(BearerError)` - no usable credential
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(BearerError::Missing)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::Missing)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Empty);
    }

    Ok(token)
}
