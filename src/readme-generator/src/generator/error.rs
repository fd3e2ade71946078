//! Generation and generator configuration error types.

use crate::prompt::PromptError;
use crate::transport::BoxError;
use thiserror::Error;

/// Errors that can occur while generating a README.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The generation API answered with a non-success status.
    #[error("Failed to generate README: {message}")]
    GenerationFailed { message: String },

    /// The generation API answered successfully but without generated text.
    #[error("Invalid response from Gemini API")]
    InvalidResponse,

    /// The request could not be performed at all.
    #[error("Failed to reach Gemini API: {0}")]
    Network(#[source] BoxError),

    /// No API key was configured.
    #[error(
        "Gemini API key not configured (use --api-key, GEMINI_API_KEY, api-key in config.toml or GOOGLE_API_KEY)"
    )]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("Failed to build Gemini client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The prompt could not be rendered.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl From<reqwest::Error> for GenerationError {
    // The request URL carries the API key.
    fn from(error: reqwest::Error) -> Self {
        Self::Network(Box::new(error.without_url()))
    }
}

/// Errors that can occur while loading generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file.
    #[error("Failed to parse config file '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The configured base URL and model do not form a valid endpoint.
    #[error("Invalid Gemini endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
