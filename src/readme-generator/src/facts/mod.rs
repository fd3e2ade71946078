//! Consolidated repository facts.
//!
//! [`RepositoryFacts`] is built once per request by the fetcher and is only
//! read afterwards by the classifier, analysis and prompt builder.

mod manifest;
mod presence;

pub use manifest::{ManifestScript, PackageManifest};
pub use presence::{PresenceFlags, PACKAGE_JSON};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything known about one repository for one generation request.
///
/// Every field is always present; auxiliary data that could not be fetched is
/// left empty rather than missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryFacts {
    /// Owner login.
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Canonical GitHub URL.
    pub html_url: String,

    /// Project homepage, if set.
    pub homepage: Option<String>,

    /// Free-text description.
    pub description: Option<String>,

    /// Topic tags, in API order.
    pub topics: Vec<String>,

    /// Primary language label.
    pub language: Option<String>,

    /// Language name to byte count.
    pub languages: BTreeMap<String, u64>,

    /// Star count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,

    /// Open issue count.
    pub open_issues: u64,

    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,

    /// Release tags, most recent first, at most 5.
    pub releases: Vec<String>,

    /// Contributor logins, at most 10.
    pub contributors: Vec<String>,

    /// License name.
    pub license: Option<String>,

    /// Well-known top-level files.
    pub presence: PresenceFlags,

    /// Parsed `package.json`, when present and decodable.
    pub manifest: Option<PackageManifest>,

    /// Top-level file and directory names.
    pub files: Vec<String>,
}

impl RepositoryFacts {
    /// Returns the repository in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns the most recent release tag.
    #[must_use]
    pub fn latest_release(&self) -> Option<&str> {
        self.releases.first().map(String::as_str)
    }

    /// Returns true if the language breakdown contains `language`.
    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }
}
