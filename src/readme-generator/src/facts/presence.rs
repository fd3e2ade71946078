//! Well-known top-level files.

use serde::Serialize;

/// Node.js package manifest file name.
pub const PACKAGE_JSON: &str = "package.json";

/// Whether specific well-known files exist at the repository root.
///
/// Absent files are simply `false`; a missing listing leaves every flag unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PresenceFlags {
    /// `package.json`
    pub package_json: bool,
    /// `requirements.txt`
    pub requirements: bool,
    /// `Dockerfile`
    pub dockerfile: bool,
    /// `Makefile`
    pub makefile: bool,
    /// `Gemfile`
    pub gemfile: bool,
    /// `composer.json`
    pub composer_json: bool,
    /// `setup.py`
    pub setup_py: bool,
}

impl PresenceFlags {
    /// Sets each flag from an exact file name match in a top-level listing.
    #[must_use]
    pub fn from_listing<S: AsRef<str>>(files: &[S]) -> Self {
        let has = |wanted: &str| files.iter().any(|file| file.as_ref() == wanted);
        Self {
            package_json: has(PACKAGE_JSON),
            requirements: has("requirements.txt"),
            dockerfile: has("Dockerfile"),
            makefile: has("Makefile"),
            gemfile: has("Gemfile"),
            composer_json: has("composer.json"),
            setup_py: has("setup.py"),
        }
    }
}
