//! User input parsing.
//!
//! Repositories can be given either as a separate owner and name, or as a
//! single GitHub URL. Both forms are validated here, before any network call.

mod error;

pub use error::InputError;

use crate::archetype::Archetype;
use serde::Serialize;
use std::fmt;

/// Host marker that precedes the owner segment in a repository URL.
const GITHUB_HOST: &str = "github.com/";

/// A validated `owner/name` pair identifying one GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryRef {
    /// Builds a reference from separately entered owner and repository fields.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingParts`] if either field is blank.
    pub fn from_parts(owner: &str, name: &str) -> Result<Self, InputError> {
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() {
            return Err(InputError::MissingParts);
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Parses a repository URL such as `https://github.com/octocat/Hello-World.git`.
    ///
    /// A trailing `.git` is dropped, then the first two path segments after
    /// `github.com/` become the owner and name. The scheme is optional.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingUrl`] for blank input and
    /// [`InputError::InvalidUrl`] when no owner and name can be extracted.
    pub fn from_url(url: &str) -> Result<Self, InputError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(InputError::MissingUrl);
        }

        let invalid = || InputError::InvalidUrl {
            url: url.to_string(),
        };

        let clean = url.strip_suffix(".git").unwrap_or(url);
        let (_, path) = clean.split_once(GITHUB_HOST).ok_or_else(invalid)?;

        let mut segments = path.split(['/', '?', '#']);
        let owner = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(invalid)?;
        let name = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(invalid)?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Returns the repository in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parses the archetype selector.
///
/// `auto` (or a blank value) means "classify automatically" and yields `None`.
///
/// # Errors
///
/// Returns [`InputError::UnknownArchetype`] for anything else that is not an
/// archetype id.
pub fn parse_archetype_override(value: &str) -> Result<Option<Archetype>, InputError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    value.parse().map(Some)
}
