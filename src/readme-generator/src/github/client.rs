//! GitHub REST transport.

use super::error::FetchError;
use crate::transport::ApiResponse;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::fmt;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Base endpoint of the GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Read access to the GitHub REST API.
///
/// Implementations return every completed exchange as an [`ApiResponse`],
/// whatever its status; only failures to perform the request are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Issues `GET {base}{route}`, e.g. `route = "/repos/octocat/Hello-World"`.
    async fn get(&self, route: &str) -> Result<ApiResponse, FetchError>;
}

/// [`GitHubApi`] backed by an [`Octocrab`] client.
pub struct OctocrabApi {
    octocrab: Octocrab,
    base_url: String,
}

impl OctocrabApi {
    /// Creates a client, unauthenticated unless a personal token is given.
    ///
    /// Octocrab's built-in retry layer is disabled; every route is requested
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the underlying client cannot be built.
    pub fn new(token: Option<&str>) -> Result<Self, FetchError> {
        let builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        let octocrab = match token {
            Some(token) => builder.personal_token(token.to_string()).build(),
            None => builder.build(),
        }
        .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            octocrab,
            base_url: GITHUB_API_BASE_URL.to_string(),
        })
    }
}

impl fmt::Debug for OctocrabApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctocrabApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    async fn get(&self, route: &str) -> Result<ApiResponse, FetchError> {
        let uri = format!("{}{}", self.base_url, route);
        debug!(route, "GitHub request");

        // `_get` hands back the raw response without turning statuses into errors.
        let response = self.octocrab._get(uri).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        debug!(route, status = status.as_u16(), "GitHub response");
        Ok(ApiResponse::new(
            status.as_u16(),
            status.canonical_reason(),
            body,
        ))
    }
}
