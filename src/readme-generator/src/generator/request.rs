//! Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;
/// Top-k sampling cutoff.
pub const TOP_K: u32 = 40;
/// Nucleus sampling cutoff.
pub const TOP_P: f32 = 0.95;
/// Upper bound on generated tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Body of a `generateContent` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

/// Fixed sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerateContentRequest {
    /// Wraps a prompt as a single-part request with the fixed sampling parameters.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }

    /// Returns the text of the first part.
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.contents
            .first()
            .and_then(|content| content.parts.first())
            .map_or("", |part| part.text.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Takes `candidates[0].content.parts[0].text`.
    pub(crate) fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
