//! Input validation error types.

use thiserror::Error;

/// Malformed or missing user input, detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// URL mode was selected but no URL was given.
    #[error("Please enter a GitHub repository URL")]
    MissingUrl,

    /// The URL does not contain `github.com/{owner}/{repo}`.
    #[error("Invalid GitHub URL format. Please use: https://github.com/username/repository")]
    InvalidUrl { url: String },

    /// Owner or repository name is empty.
    #[error("Please enter both username and repository name")]
    MissingParts,

    /// The archetype override is not one of the known ids.
    #[error("Unknown template '{0}'; expected 'auto' or one of: comprehensive, startup, open_source, library, portfolio, academic, enterprise, minimalist")]
    UnknownArchetype(String),
}
