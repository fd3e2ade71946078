//! Output error types.

/// Errors that can occur while writing generated output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Failed to write the README file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The run produced a prompt preview rather than a README.
    #[error("Dry run produced no README to write")]
    NoReadme,
}
