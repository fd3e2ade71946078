//! Runner configuration.

use crate::archetype::Archetype;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the generator config file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration for a README generation run.
#[derive(Clone)]
pub struct RunnerConfig {
    /// Path to the generator config file.
    config_path: PathBuf,
    /// Gemini API key given on the command line or via `GEMINI_API_KEY`.
    api_key: Option<String>,
    /// Optional GitHub token, only used to raise the rate limit.
    github_token: Option<String>,
    /// Archetype override; `None` lets the classifier decide.
    archetype: Option<Archetype>,
    /// Whether to stop after rendering the prompt.
    dry_run: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            api_key: None,
            github_token: None,
            archetype: None,
            dry_run: false,
        }
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("config_path", &self.config_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("archetype", &self.archetype)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl RunnerConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom generator config path.
    #[must_use]
    pub fn with_config_path(mut self, config_path: PathBuf) -> Self {
        self.config_path = config_path;
        self
    }

    /// Sets the explicit Gemini API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the GitHub token.
    #[must_use]
    pub fn with_github_token(mut self, github_token: Option<String>) -> Self {
        self.github_token = github_token;
        self
    }

    /// Sets the archetype override.
    #[must_use]
    pub fn with_archetype(mut self, archetype: Option<Archetype>) -> Self {
        self.archetype = archetype;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the generator config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the explicit API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the GitHub token, if any.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    /// Returns the archetype override, if any.
    pub fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
