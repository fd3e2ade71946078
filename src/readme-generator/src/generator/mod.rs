//! README generation through the Gemini API.
//!
//! The generator resolves the effective archetype, renders the prompt and
//! sends it through a [`GenerationTransport`]. Responses are interpreted here,
//! so transports only move bytes.

mod client;
mod config;
mod error;
mod request;

pub use client::{GeminiClient, GenerationTransport};
pub use config::{load_config, GeneratorConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{ConfigError, GenerationError};
pub use request::{
    Content, GenerateContentRequest, GenerationConfig, Part, MAX_OUTPUT_TOKENS, TEMPERATURE,
    TOP_K, TOP_P,
};

#[cfg(test)]
pub use client::MockGenerationTransport;

use crate::analysis::RepositoryAnalysis;
use crate::archetype::Archetype;
use crate::classify::classify;
use crate::facts::RepositoryFacts;
use crate::prompt::PromptBuilder;
use crate::transport::ApiResponse;
use chrono::{DateTime, Utc};
use request::{ErrorEnvelope, GenerateContentResponse};
use tracing::{info, warn};

/// Returns the override when given, otherwise the classified archetype.
#[must_use]
pub fn resolve_archetype(facts: &RepositoryFacts, archetype: Option<Archetype>) -> Archetype {
    archetype.unwrap_or_else(|| classify(facts))
}

/// Renders the prompt that would be sent for `facts` in the style of `archetype`.
///
/// # Errors
///
/// Returns an error if the prompt cannot be rendered.
pub fn render_prompt(
    builder: &PromptBuilder,
    facts: &RepositoryFacts,
    archetype: Archetype,
    now: DateTime<Utc>,
) -> Result<String, GenerationError> {
    let analysis = RepositoryAnalysis::new(facts, now);
    Ok(builder.build(facts, &analysis, archetype)?)
}

/// Generates README text for `facts`.
///
/// The archetype is `archetype` when given, otherwise [`classify`]'s choice.
///
/// # Errors
///
/// Returns an error if the prompt cannot be rendered, the request fails, or
/// the API does not return generated text.
pub async fn generate<T: GenerationTransport + ?Sized>(
    transport: &T,
    facts: &RepositoryFacts,
    archetype: Option<Archetype>,
) -> Result<String, GenerationError> {
    let archetype = resolve_archetype(facts, archetype);
    let prompt = render_prompt(&PromptBuilder::new(), facts, archetype, Utc::now())?;
    send_prompt(transport, prompt).await
}

/// Sends an already rendered prompt and returns the generated text verbatim.
///
/// # Errors
///
/// Returns an error if the request fails or the API does not return generated text.
pub async fn send_prompt<T: GenerationTransport + ?Sized>(
    transport: &T,
    prompt: String,
) -> Result<String, GenerationError> {
    let request = GenerateContentRequest::new(prompt);
    let response = transport.send(&request).await?;
    let text = interpret_response(response)?;
    info!(length = text.len(), "README generated");
    Ok(text)
}

/// Extracts generated text from a raw `generateContent` response.
///
/// # Errors
///
/// Returns [`GenerationError::GenerationFailed`] for non-success statuses,
/// carrying the API's `error.message` when present and the status text
/// otherwise, and [`GenerationError::InvalidResponse`] when a successful
/// body holds no `candidates[0].content.parts[0].text`.
pub fn interpret_response(response: ApiResponse) -> Result<String, GenerationError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&response.body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or(response.status_text);
        warn!(status = response.status, %message, "Gemini request failed");
        return Err(GenerationError::GenerationFailed { message });
    }

    serde_json::from_str::<GenerateContentResponse>(&response.body)
        .ok()
        .and_then(GenerateContentResponse::into_text)
        .ok_or(GenerationError::InvalidResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: serde_json::Value) -> ApiResponse {
        ApiResponse::new(200, Some("OK"), body.to_string())
    }

    fn hello_world() -> RepositoryFacts {
        RepositoryFacts {
            owner: "octocat".to_string(),
            name: "Hello-World".to_string(),
            html_url: "https://github.com/octocat/Hello-World".to_string(),
            language: Some("C".to_string()),
            stars: 1500,
            ..Default::default()
        }
    }

    #[test]
    fn returns_text_verbatim() {
        let text = interpret_response(ok(json!({
            "candidates": [{"content": {"parts": [{"text": "# Hello\n\n"}]}}]
        })))
        .unwrap();
        assert_eq!(text, "# Hello\n\n");
    }

    #[test]
    fn failure_uses_api_message() {
        let response = ApiResponse::new(
            400,
            Some("Bad Request"),
            json!({"error": {"code": 400, "message": "API key not valid."}}).to_string(),
        );
        let err = interpret_response(response).unwrap_err();
        match err {
            GenerationError::GenerationFailed { message } => {
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_status_text() {
        let response = ApiResponse::new(503, Some("Service Unavailable"), "upstream down");
        let err = interpret_response(response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to generate README: 503 Service Unavailable"
        );
    }

    #[test]
    fn success_without_text_is_invalid() {
        let err = interpret_response(ok(json!({"candidates": []}))).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse));

        let err = interpret_response(ApiResponse::new(200, Some("OK"), "not json")).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse));
    }

    #[test]
    fn override_beats_classification() {
        let facts = hello_world();
        assert_eq!(resolve_archetype(&facts, None), Archetype::Comprehensive);
        assert_eq!(
            resolve_archetype(&facts, Some(Archetype::Minimalist)),
            Archetype::Minimalist
        );
    }

    #[tokio::test]
    async fn generate_sends_rendered_prompt() {
        let mut transport = MockGenerationTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.prompt().contains("Stars**: 1500")
                    && request.prompt().starts_with("Generate a Startup/MVP README.md")
                    && request.generation_config == GenerationConfig::default()
            })
            .times(1)
            .returning(|_| {
                Ok(ok(json!({
                    "candidates": [{"content": {"parts": [{"text": "# Hello-World"}]}}]
                })))
            });

        let text = generate(&transport, &hello_world(), Some(Archetype::Startup))
            .await
            .unwrap();
        assert_eq!(text, "# Hello-World");
    }

    #[tokio::test]
    async fn generate_propagates_api_failure() {
        let mut transport = MockGenerationTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(ApiResponse::new(
                429,
                Some("Too Many Requests"),
                json!({"error": {"message": "Quota exceeded"}}).to_string(),
            ))
        });

        let err = generate(&transport, &hello_world(), None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate README: Quota exceeded");
    }
}
