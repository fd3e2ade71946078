//! Repository fetch error types.

use crate::transport::BoxError;
use thiserror::Error;

/// Errors that can occur while fetching repository facts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The primary repository lookup returned a non-success status.
    #[error("Failed to fetch repository details: {repository} returned {status}")]
    RepositoryNotFound { repository: String, status: String },

    /// A request could not be performed at all.
    #[error("Failed to fetch repository details: {0}")]
    Network(#[from] BoxError),

    /// The primary repository response was not the expected JSON shape.
    #[error("Failed to decode GitHub response for '{route}': {source}")]
    Decode {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    /// The GitHub client could not be constructed.
    #[error("Failed to build GitHub client: {source}")]
    Client {
        #[source]
        source: octocrab::Error,
    },
}

impl From<octocrab::Error> for FetchError {
    fn from(error: octocrab::Error) -> Self {
        Self::Network(Box::new(error))
    }
}

/// Reasons the optional `package.json` could not be decoded.
#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    /// The contents response or the decoded manifest is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The `content` field is not valid base64.
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),
}
