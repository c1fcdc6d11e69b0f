//! Error types for the Rick & Morty client
//!
//! Every fallible operation in the crate returns [`MortyError`].
//! MortyError implements Serialize so front ends can emit it as JSON.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Rick & Morty API operations
#[derive(Error, Debug)]
pub enum MortyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Requested resource was not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid resource ID provided
    #[error("Invalid ID: {0}")]
    InvalidId(u32),

    /// Invalid page number provided
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    /// A resource could not be mapped to the domain model
    #[error("Malformed resource: {0}")]
    MalformedResource(String),
}

/// Serialize MortyError as its display string
impl Serialize for MortyError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Rick & Morty API operations
pub type Result<T> = std::result::Result<T, MortyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morty_error_display_not_found() {
        let error = MortyError::NotFound("/character/9999".to_string());
        assert_eq!(error.to_string(), "Resource not found: /character/9999");
    }

    #[test]
    fn test_morty_error_display_rate_limited() {
        let error = MortyError::RateLimited;
        assert_eq!(error.to_string(), "Rate limited - too many requests");
    }

    #[test]
    fn test_morty_error_display_invalid_url() {
        let error = MortyError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn test_morty_error_display_invalid_id_and_page() {
        assert_eq!(MortyError::InvalidId(0).to_string(), "Invalid ID: 0");
        assert_eq!(MortyError::InvalidPage(0).to_string(), "Invalid page number: 0");
    }

    #[test]
    fn test_morty_error_display_malformed_resource() {
        let error = MortyError::MalformedResource("episode code 'Pilot'".to_string());
        assert_eq!(error.to_string(), "Malformed resource: episode code 'Pilot'");
    }

    #[test]
    fn test_morty_error_from_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = MortyError::from(source);
        assert!(matches!(error, MortyError::DecodeError(_)));
        assert!(error.to_string().starts_with("Failed to decode response:"));
    }

    #[test]
    fn test_morty_error_serialize() {
        let error = MortyError::InvalidId(42);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Invalid ID: 42\"");
    }

    #[test]
    fn test_morty_error_serialize_rate_limited() {
        let error = MortyError::RateLimited;
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Rate limited - too many requests\"");
    }
}
