//! Repository facts from the GitHub REST API.
//!
//! One primary lookup decides whether the repository exists. Four auxiliary
//! lookups (languages, contributors, releases, top-level contents) then run
//! concurrently; each degrades to an empty value on failure. When a
//! `package.json` is present, one more dependent lookup fetches and decodes it.

mod client;
mod error;
mod payload;

pub use client::{GitHubApi, OctocrabApi, GITHUB_API_BASE_URL};
pub use error::FetchError;

#[cfg(test)]
pub use client::MockGitHubApi;

use crate::facts::{PackageManifest, PresenceFlags, RepositoryFacts, PACKAGE_JSON};
use base64::{engine::general_purpose::STANDARD, Engine};
use error::ManifestError;
use payload::{
    ContentEntry, ContentFile, ContributorPayload, ReleasePayload, RepositoryPayload,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::{debug, info, info_span, warn, Instrument};

/// Maximum number of contributors kept.
pub const MAX_CONTRIBUTORS: usize = 10;

/// Maximum number of releases kept.
pub const MAX_RELEASES: usize = 5;

/// Fetches and consolidates everything known about a repository.
///
/// # Arguments
///
/// * `api` - GitHub transport
/// * `owner` - Repository owner
/// * `name` - Repository name
///
/// # Errors
///
/// Returns [`FetchError::RepositoryNotFound`] if the primary lookup does not
/// succeed, [`FetchError::Decode`] if its body is not a repository, and
/// [`FetchError::Network`] if any primary or auxiliary request cannot be made.
/// Non-success auxiliary responses are not errors.
pub async fn fetch_repository<A>(
    api: &A,
    owner: &str,
    name: &str,
) -> Result<RepositoryFacts, FetchError>
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!("fetch", owner = %owner, repo = %name);

    async {
        info!("Fetching repository details");

        let route = repository_route(owner, name);
        let response = api.get(&route).await?;
        if !response.is_success() {
            return Err(FetchError::RepositoryNotFound {
                repository: format!("{owner}/{name}"),
                status: response.status_text,
            });
        }
        let repository: RepositoryPayload =
            serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
                route: route.clone(),
                source,
            })?;

        let languages_route = format!("{route}/languages");
        let contributors_route = format!("{route}/contributors");
        let releases_route = format!("{route}/releases");
        let contents_route = format!("{route}/contents");
        let (languages, contributors, releases, contents) = futures::join!(
            api.get(&languages_route),
            api.get(&contributors_route),
            api.get(&releases_route),
            api.get(&contents_route),
        );

        let languages: BTreeMap<String, u64> = auxiliary("languages", languages?);
        let contributors: Vec<ContributorPayload> = auxiliary("contributors", contributors?);
        let releases: Vec<ReleasePayload> = auxiliary("releases", releases?);
        let contents: Vec<ContentEntry> = auxiliary("contents", contents?);

        let files: Vec<String> = contents.into_iter().map(|entry| entry.name).collect();
        let presence = PresenceFlags::from_listing(&files);

        let manifest = if presence.package_json {
            fetch_manifest(api, &route).await
        } else {
            None
        };

        let facts = assemble(
            owner,
            name,
            repository,
            Auxiliary {
                languages,
                contributors,
                releases,
                files,
                presence,
                manifest,
            },
        );

        info!(
            stars = facts.stars,
            languages = facts.languages.len(),
            files = facts.files.len(),
            "Fetched repository details"
        );
        Ok(facts)
    }
    .instrument(span)
    .await
}

/// Builds the `/repos/{owner}/{repo}` route.
fn repository_route(owner: &str, name: &str) -> String {
    format!("/repos/{owner}/{name}")
}

/// Decodes an auxiliary response, falling back to the empty value.
fn auxiliary<T>(facet: &str, response: crate::transport::ApiResponse) -> T
where
    T: DeserializeOwned + Default,
{
    if !response.is_success() {
        warn!(
            facet,
            status = %response.status_text,
            "Auxiliary lookup failed, using empty default"
        );
        return T::default();
    }
    match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(e) => {
            warn!(facet, error = %e, "Auxiliary response not decodable, using empty default");
            T::default()
        }
    }
}

/// Fetches and decodes `package.json`. Every failure is logged and yields `None`.
async fn fetch_manifest<A>(api: &A, route: &str) -> Option<PackageManifest>
where
    A: GitHubApi + ?Sized,
{
    let response = match api.get(&format!("{route}/contents/{PACKAGE_JSON}")).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Could not fetch package.json");
            return None;
        }
    };

    if !response.is_success() {
        warn!(status = %response.status_text, "Could not fetch package.json");
        return None;
    }

    match decode_manifest(&response.body) {
        Ok(manifest) => {
            debug!(scripts = manifest.scripts.len(), "Decoded package.json");
            Some(manifest)
        }
        Err(e) => {
            warn!(error = %e, "Could not decode package.json");
            None
        }
    }
}

/// Decodes a contents response whose `content` is base64-encoded JSON.
///
/// GitHub wraps the base64 payload with newlines, which are stripped first.
fn decode_manifest(body: &str) -> Result<PackageManifest, ManifestError> {
    let file: ContentFile = serde_json::from_str(body)?;
    let compact: String = file.content.split_whitespace().collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Auxiliary data gathered after the primary lookup.
struct Auxiliary {
    languages: BTreeMap<String, u64>,
    contributors: Vec<ContributorPayload>,
    releases: Vec<ReleasePayload>,
    files: Vec<String>,
    presence: PresenceFlags,
    manifest: Option<PackageManifest>,
}

/// Consolidates the primary payload and auxiliary data into facts.
///
/// Identity fields missing from the payload fall back to the requested owner
/// and name.
fn assemble(
    owner: &str,
    name: &str,
    repository: RepositoryPayload,
    aux: Auxiliary,
) -> RepositoryFacts {
    let owner = repository
        .owner
        .map(|owner| owner.login)
        .unwrap_or_else(|| owner.to_string());
    let name = repository.name.unwrap_or_else(|| name.to_string());
    let html_url = repository
        .html_url
        .unwrap_or_else(|| format!("https://github.com/{owner}/{name}"));

    RepositoryFacts {
        homepage: repository.homepage.filter(|homepage| !homepage.is_empty()),
        description: repository
            .description
            .filter(|description| !description.is_empty()),
        topics: repository.topics.unwrap_or_default(),
        language: repository.language,
        languages: aux.languages,
        stars: repository.stargazers_count,
        forks: repository.forks_count,
        open_issues: repository.open_issues_count,
        created_at: repository.created_at,
        updated_at: repository.updated_at,
        releases: aux
            .releases
            .into_iter()
            .take(MAX_RELEASES)
            .map(|release| release.tag_name)
            .collect(),
        contributors: aux
            .contributors
            .into_iter()
            .take(MAX_CONTRIBUTORS)
            .filter_map(|contributor| contributor.login)
            .collect(),
        license: repository.license.and_then(|license| license.name),
        presence: aux.presence,
        manifest: aux.manifest,
        files: aux.files,
        owner,
        name,
        html_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ApiResponse;

    fn ok(body: &str) -> Result<ApiResponse, FetchError> {
        Ok(ApiResponse::new(200, Some("OK"), body))
    }

    fn not_found() -> Result<ApiResponse, FetchError> {
        Ok(ApiResponse::new(404, Some("Not Found"), r#"{"message":"Not Found"}"#))
    }

    fn encoded(json: &str) -> String {
        // GitHub splits the payload into 60-character lines.
        let encoded = STANDARD.encode(json);
        let lines: Vec<String> = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        lines.join("\n")
    }

    #[tokio::test]
    async fn auxiliary_failures_degrade_to_empty_defaults() {
        let mut api = MockGitHubApi::new();
        api.expect_get().returning(|route| match route {
            "/repos/octocat/Hello-World" => ok(r#"{"stargazers_count": 1500, "language": "C"}"#),
            _ => not_found(),
        });

        let facts = fetch_repository(&api, "octocat", "Hello-World").await.unwrap();

        assert_eq!(facts.owner, "octocat");
        assert_eq!(facts.name, "Hello-World");
        assert_eq!(facts.stars, 1500);
        assert_eq!(facts.language.as_deref(), Some("C"));
        assert!(facts.languages.is_empty());
        assert!(facts.contributors.is_empty());
        assert!(facts.releases.is_empty());
        assert!(facts.files.is_empty());
        assert_eq!(facts.presence, PresenceFlags::default());
        assert!(facts.manifest.is_none());
    }

    #[tokio::test]
    async fn primary_failure_is_fatal_and_reports_status() {
        let mut api = MockGitHubApi::new();
        api.expect_get().times(1).returning(|_| not_found());

        let error = fetch_repository(&api, "octocat", "missing").await.unwrap_err();

        assert!(matches!(error, FetchError::RepositoryNotFound { .. }));
        assert!(error.to_string().contains("404 Not Found"));
    }

    #[tokio::test]
    async fn network_error_in_fan_out_propagates() {
        let mut api = MockGitHubApi::new();
        api.expect_get().returning(|route| match route {
            "/repos/octocat/Hello-World" => ok("{}"),
            "/repos/octocat/Hello-World/releases" => {
                Err(FetchError::Network("connection reset".into()))
            }
            _ => ok("[]"),
        });

        let error = fetch_repository(&api, "octocat", "Hello-World").await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Failed to fetch repository details: connection reset"
        );
    }

    #[tokio::test]
    async fn consolidates_all_facets() {
        let manifest = encoded(
            r#"{"scripts": {"dev": "vite", "build": "vite build"}, "dependencies": {"react": "18"}}"#,
        );
        let manifest_body = serde_json::json!({ "content": manifest, "encoding": "base64" }).to_string();

        let mut api = MockGitHubApi::new();
        api.expect_get().returning(move |route| match route {
            "/repos/acme/widgets" => ok(r#"{
                "name": "widgets",
                "owner": {"login": "acme"},
                "html_url": "https://github.com/acme/widgets",
                "homepage": "",
                "description": "Reusable widgets",
                "topics": ["ui", "react"],
                "language": "TypeScript",
                "stargazers_count": 42,
                "forks_count": 7,
                "open_issues_count": 3,
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2024-06-01T12:30:00Z",
                "license": {"key": "mit", "name": "MIT License"}
            }"#),
            "/repos/acme/widgets/languages" => ok(r#"{"TypeScript": 900, "CSS": 100}"#),
            "/repos/acme/widgets/contributors" => {
                let contributors: Vec<_> = (0..15)
                    .map(|i| serde_json::json!({ "login": format!("user{i}") }))
                    .collect();
                ok(&serde_json::Value::from(contributors).to_string())
            }
            "/repos/acme/widgets/releases" => ok(r#"[
                {"tag_name": "v7"}, {"tag_name": "v6"}, {"tag_name": "v5"},
                {"tag_name": "v4"}, {"tag_name": "v3"}, {"tag_name": "v2"}
            ]"#),
            "/repos/acme/widgets/contents" => ok(r#"[
                {"name": "package.json", "type": "file"},
                {"name": "Dockerfile", "type": "file"},
                {"name": "src", "type": "dir"}
            ]"#),
            "/repos/acme/widgets/contents/package.json" => ok(&manifest_body),
            other => panic!("unexpected route {other}"),
        });

        let facts = fetch_repository(&api, "acme", "widgets").await.unwrap();

        assert_eq!(facts.full_name(), "acme/widgets");
        assert_eq!(facts.homepage, None);
        assert_eq!(facts.license.as_deref(), Some("MIT License"));
        assert_eq!(facts.topics, ["ui", "react"]);
        assert_eq!(facts.languages.get("TypeScript"), Some(&900));
        assert_eq!(facts.contributors.len(), MAX_CONTRIBUTORS);
        assert_eq!(facts.contributors[0], "user0");
        assert_eq!(facts.releases, ["v7", "v6", "v5", "v4", "v3"]);
        assert_eq!(facts.latest_release(), Some("v7"));
        assert_eq!(facts.files, ["package.json", "Dockerfile", "src"]);
        assert!(facts.presence.package_json);
        assert!(facts.presence.dockerfile);
        assert!(!facts.presence.requirements);

        let manifest = facts.manifest.expect("manifest should be decoded");
        assert!(manifest.has_script("build"));
        assert!(manifest.dependencies.contains("react"));
    }

    #[tokio::test]
    async fn undecodable_manifest_is_not_an_error() {
        let mut api = MockGitHubApi::new();
        api.expect_get().returning(|route| match route {
            "/repos/acme/site" => ok("{}"),
            "/repos/acme/site/contents" => ok(r#"[{"name": "package.json"}]"#),
            "/repos/acme/site/contents/package.json" => ok(r#"{"content": "not base64!"}"#),
            _ => not_found(),
        });

        let facts = fetch_repository(&api, "acme", "site").await.unwrap();

        assert!(facts.presence.package_json);
        assert!(facts.manifest.is_none());
    }

    #[tokio::test]
    async fn manifest_transport_error_is_not_an_error() {
        let mut api = MockGitHubApi::new();
        api.expect_get().returning(|route| match route {
            "/repos/acme/site" => ok("{}"),
            "/repos/acme/site/contents" => ok(r#"[{"name": "package.json"}]"#),
            "/repos/acme/site/contents/package.json" => {
                Err(FetchError::Network("timed out".into()))
            }
            _ => ok("[]"),
        });

        let facts = fetch_repository(&api, "acme", "site").await.unwrap();
        assert!(facts.manifest.is_none());
    }

    #[tokio::test]
    async fn undecodable_primary_body_is_a_decode_error() {
        let mut api = MockGitHubApi::new();
        api.expect_get().returning(|_| ok("<html>"));

        let error = fetch_repository(&api, "acme", "site").await.unwrap_err();
        assert!(matches!(error, FetchError::Decode { .. }));
    }

    #[test]
    fn decodes_wrapped_base64_manifest() {
        let body = serde_json::json!({
            "content": encoded(r#"{"scripts": {"test": "jest"}, "workspaces": ["packages/*"]}"#)
        })
        .to_string();

        let manifest = decode_manifest(&body).unwrap();
        assert!(manifest.has_script("test"));
        assert!(manifest.workspaces);
    }
}
