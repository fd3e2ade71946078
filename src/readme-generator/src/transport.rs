//! Raw HTTP responses shared by the GitHub and Gemini seams.

/// Boxed transport failure, keeping domain errors independent of the HTTP client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status and body of a completed HTTP exchange.
///
/// Both API clients hand responses back in this shape so that status handling
/// and body decoding stay in the domain modules, independent of the HTTP crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Numeric HTTP status code.
    pub status: u16,

    /// Status line text, e.g. "404 Not Found".
    pub status_text: String,

    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response from a status code, its canonical reason and a body.
    #[must_use]
    pub fn new(status: u16, reason: Option<&str>, body: impl Into<String>) -> Self {
        let status_text = match reason {
            Some(reason) => format!("{status} {reason}"),
            None => status.to_string(),
        };
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
