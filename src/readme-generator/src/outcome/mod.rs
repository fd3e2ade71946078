//! Result of a single generation run.

mod error;

pub use error::OutputError;

use crate::archetype::Archetype;
use crate::input::RepositoryRef;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used when the output target is a directory.
pub const README_FILE_NAME: &str = "README.md";

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    /// Markdown returned by the generator.
    Readme(String),
    /// Prompt that would have been sent (dry run).
    Prompt(String),
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Repository the README was generated for.
    pub repository: RepositoryRef,

    /// Archetype used for generation.
    pub archetype: Archetype,

    /// Archetype the classifier chose, whether or not it was used.
    pub detected: Archetype,

    /// Whether no override was given.
    pub auto_detected: bool,

    /// Generated README or previewed prompt.
    pub content: GeneratedContent,
}

impl RunOutcome {
    /// Returns true if the run stopped before calling the generator.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        matches!(self.content, GeneratedContent::Prompt(_))
    }

    /// Returns the produced text verbatim.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.content {
            GeneratedContent::Readme(text) | GeneratedContent::Prompt(text) => text,
        }
    }

    /// Returns the README with surrounding whitespace removed, if one was generated.
    #[must_use]
    pub fn trimmed_readme(&self) -> Option<&str> {
        match &self.content {
            GeneratedContent::Readme(text) => Some(text.trim()),
            GeneratedContent::Prompt(_) => None,
        }
    }

    /// Writes the trimmed README.
    ///
    /// A directory target receives a `README.md`; any other path is written as is.
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns an error for dry-run outcomes or if the file cannot be written.
    pub fn write_readme(&self, target: &Path) -> Result<PathBuf, OutputError> {
        let readme = self.trimmed_readme().ok_or(OutputError::NoReadme)?;
        let path = if target.is_dir() {
            target.join(README_FILE_NAME)
        } else {
            target.to_path_buf()
        };

        std::fs::write(&path, readme).map_err(|source| OutputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), bytes = readme.len(), "README written");
        Ok(path)
    }
}
