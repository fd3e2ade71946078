//! Generator configuration parsed from `config.toml`.

use super::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use url::Url;

/// Model used when the config file does not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// API root used when the config file does not override it.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable consulted last when resolving the API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Settings for the Gemini generator, read from the `[llm]` table.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Model name (e.g., "gemini-1.5-flash-latest").
    #[serde(default = "default_model")]
    model: String,
    /// API key (optional, falls back to GOOGLE_API_KEY env var).
    api_key: Option<String>,
    /// Base URL of the API, without a trailing `/models` segment.
    #[serde(default = "default_base_url")]
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratorConfigFile {
    #[serde(default)]
    llm: GeneratorConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeneratorConfig {
    /// Sets the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API key stored in the configuration.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves the API key to use.
    ///
    /// `explicit` (command line or `GEMINI_API_KEY`) wins, then the key stored
    /// in the config file, then the `GOOGLE_API_KEY` environment variable.
    /// Blank values are skipped.
    #[must_use]
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_owned)
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    /// Builds the `generateContent` endpoint for the configured model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the base URL is not a valid URL.
    pub fn endpoint(&self, api_key: &str) -> Result<Url, ConfigError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        Url::parse_with_params(&url, &[("key", api_key)])
            .map_err(|source| ConfigError::InvalidEndpoint { url, source })
    }
}

/// Loads the generator config file if it exists.
///
/// A file without an `[llm]` table yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Option<GeneratorConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: GeneratorConfigFile =
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(parsed.llm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_config_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        let config = load_config(&path).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn load_config_parses_llm_table() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[llm]
model = "gemini-2.0-flash"
api-key = "file-key"
base-url = "http://localhost:8080/v1beta/"
"#,
        );
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.model(), "gemini-2.0-flash");
        assert_eq!(config.base_url(), "http://localhost:8080/v1beta/");
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn load_config_applies_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[llm]\n");
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config, GeneratorConfig::default());

        let path = write_config(&temp, "");
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[llm\nmodel = ");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn explicit_key_wins() {
        let config = GeneratorConfig::default().with_api_key("file-key");
        temp_env::with_var(API_KEY_ENV, Some("env-key"), || {
            assert_eq!(
                config.resolve_api_key(Some("flag-key")).as_deref(),
                Some("flag-key")
            );
        });
    }

    #[test]
    fn file_key_beats_environment() {
        let config = GeneratorConfig::default().with_api_key("file-key");
        temp_env::with_var(API_KEY_ENV, Some("env-key"), || {
            assert_eq!(config.resolve_api_key(None).as_deref(), Some("file-key"));
            assert_eq!(config.resolve_api_key(Some("  ")).as_deref(), Some("file-key"));
        });
    }

    #[test]
    fn environment_key_is_last_resort() {
        let config = GeneratorConfig::default();
        temp_env::with_var(API_KEY_ENV, Some("env-key"), || {
            assert_eq!(config.resolve_api_key(None).as_deref(), Some("env-key"));
        });
        temp_env::with_var_unset(API_KEY_ENV, || {
            assert!(config.resolve_api_key(None).is_none());
        });
    }

    #[test]
    fn endpoint_carries_model_and_key() {
        let config = GeneratorConfig::default().with_base_url("https://example.test/v1beta/");
        let url = config.endpoint("secret").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/v1beta/models/gemini-1.5-flash-latest:generateContent?key=secret"
        );
    }

    #[test]
    fn endpoint_rejects_invalid_base_url() {
        let config = GeneratorConfig::default().with_base_url("not a url");
        let err = config.endpoint("secret").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GeneratorConfig::default().with_api_key("secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
