//! GitHub REST response shapes, reduced to the fields the fetcher reads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RepositoryPayload {
    pub name: Option<String>,
    pub owner: Option<OwnerPayload>,
    pub html_url: Option<String>,
    pub homepage: Option<String>,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub license: Option<LicensePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerPayload {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LicensePayload {
    pub name: Option<String>,
}

/// One entry of `GET /repos/{owner}/{repo}/contributors`.
///
/// Anonymous contributors have no login.
#[derive(Debug, Deserialize)]
pub(crate) struct ContributorPayload {
    pub login: Option<String>,
}

/// One entry of `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Deserialize)]
pub(crate) struct ReleasePayload {
    pub tag_name: String,
}

/// One entry of `GET /repos/{owner}/{repo}/contents`.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentEntry {
    pub name: String,
}

/// `GET /repos/{owner}/{repo}/contents/{path}` for a single file.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentFile {
    pub content: String,
}
