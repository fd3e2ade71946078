//! Runner error types.

use crate::generator::{ConfigError, GenerationError};
use crate::github::FetchError;
use crate::input::InputError;
use crate::outcome::OutputError;

/// Errors that can occur during a run.
///
/// Each variant keeps the originating module error intact.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid user input.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Repository fetch errors.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// README generation errors.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Generator configuration errors: unreadable or unparsable config file,
    /// or a base URL and model that do not form a valid endpoint.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Output writing errors.
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl RunnerError {
    /// Returns true for input validation failures, raised before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
