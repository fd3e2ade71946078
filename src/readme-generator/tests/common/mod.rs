#![allow(dead_code)]

use async_trait::async_trait;
use readme_generator::{
    ApiResponse, FetchError, GenerateContentRequest, GenerationError, GenerationTransport,
    GitHubApi,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Serves `/repos/{owner}/{repo}/...` from a fixture directory; anything
/// without a fixture file answers 404.
pub struct FixtureGitHub {
    repository: String,
    dir: PathBuf,
}

impl FixtureGitHub {
    pub fn new(owner: &str, name: &str, fixture: &str) -> Self {
        Self {
            repository: format!("/repos/{owner}/{name}"),
            dir: fixtures_root().join(fixture),
        }
    }

    fn fixture_file(&self, route: &str) -> Option<PathBuf> {
        let file = match route.strip_prefix(&self.repository)? {
            "" => "repo.json",
            "/languages" => "languages.json",
            "/contributors" => "contributors.json",
            "/releases" => "releases.json",
            "/contents" => "contents.json",
            "/contents/package.json" => "package.json",
            _ => return None,
        };
        Some(self.dir.join(file))
    }
}

#[async_trait]
impl GitHubApi for FixtureGitHub {
    async fn get(&self, route: &str) -> Result<ApiResponse, FetchError> {
        let body = self
            .fixture_file(route)
            .and_then(|path| std::fs::read_to_string(path).ok());
        Ok(match body {
            Some(body) => ApiResponse::new(200, Some("OK"), body),
            None => ApiResponse::new(404, Some("Not Found"), r#"{"message":"Not Found"}"#),
        })
    }
}

/// Answers every request with a fixed response and records the prompts.
pub struct RecordingGenerator {
    response: ApiResponse,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingGenerator {
    pub fn answering(text: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
        });
        Self::with_response(ApiResponse::new(200, Some("OK"), body.to_string()))
    }

    pub fn failing(status: u16, reason: &str, message: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        let body = serde_json::json!({
            "error": {"code": status, "message": message, "status": "INVALID_ARGUMENT"}
        });
        Self::with_response(ApiResponse::new(status, Some(reason), body.to_string()))
    }

    fn with_response(response: ApiResponse) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                response,
                prompts: Arc::clone(&prompts),
            },
            prompts,
        )
    }
}

#[async_trait]
impl GenerationTransport for RecordingGenerator {
    async fn send(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ApiResponse, GenerationError> {
        self.prompts
            .lock()
            .unwrap()
            .push(request.prompt().to_string());
        Ok(self.response.clone())
    }
}
