//! Wall Errors
//!
//! Everything that aborts a render. A render either returns the complete
//! markup or one of these; there is no partial output.

use thiserror::Error;

/// Errors raised while fetching or rendering a wall
#[derive(Debug, Error)]
pub enum WallError {
    #[error("No Facebook page id configured")]
    MissingFacebookId,

    #[error("No Facebook access token configured")]
    MissingAccessToken,

    #[error("Invalid option '{key}': {message}")]
    InvalidOption { key: String, message: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Graph API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Graph API returned an empty response")]
    EmptyResponse,

    #[error("Malformed Graph API response: {0}")]
    MalformedResponse(String),
}

impl WallError {
    pub fn invalid_option<K: AsRef<str>>(key: K, message: impl ToString) -> Self {
        Self::InvalidOption {
            key: key.as_ref().to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the failure happened before any request was made
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WallError::MissingFacebookId
                | WallError::MissingAccessToken
                | WallError::InvalidOption { .. }
        )
    }
}

impl From<reqwest::Error> for WallError {
    fn from(value: reqwest::Error) -> Self {
        // Request URLs carry the access token
        WallError::Request(value.without_url().to_string())
    }
}
