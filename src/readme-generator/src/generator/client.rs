//! Gemini HTTP transport.

use super::error::GenerationError;
use super::request::GenerateContentRequest;
use crate::transport::ApiResponse;
use async_trait::async_trait;
use std::fmt;
use tracing::debug;
use url::Url;

#[cfg(test)]
use mockall::automock;

/// Sends `generateContent` requests.
///
/// Implementations return every completed exchange as an [`ApiResponse`];
/// only failures to perform the request are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    /// Posts `request` to the configured model.
    async fn send(&self, request: &GenerateContentRequest)
        -> Result<ApiResponse, GenerationError>;
}

/// [`GenerationTransport`] backed by a [`reqwest::Client`].
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl GeminiClient {
    /// Creates a client posting to `endpoint`, as built by
    /// [`GeneratorConfig::endpoint`](super::GeneratorConfig::endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Client`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, model: impl Into<String>) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|source| GenerationError::Client {
                source: source.without_url(),
            })?;
        Ok(Self {
            http,
            endpoint,
            model: model.into(),
        })
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GenerationTransport for GeminiClient {
    async fn send(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ApiResponse, GenerationError> {
        debug!(model = %self.model, prompt_len = request.prompt().len(), "Gemini request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(model = %self.model, status = status.as_u16(), "Gemini response");
        Ok(ApiResponse::new(
            status.as_u16(),
            status.canonical_reason(),
            body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;

    #[test]
    fn debug_hides_endpoint() {
        let config = GeneratorConfig::default();
        let endpoint = config.endpoint("secret").unwrap();
        let client = GeminiClient::new(endpoint, config.model()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("gemini-1.5-flash-latest"));
        assert!(!debug.contains("secret"));
    }
}
