//! Orchestrates a README generation run.
//!
//! A run moves through `Idle → Fetching → Classifying → Generating` and ends
//! in `Done` or `Failed`. Nothing is retried; the first failure ends the run
//! with the originating error.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONFIG_PATH};
pub use error::RunnerError;

use crate::classify::{classify, matched_indicators};
use crate::generator::{
    load_config, render_prompt, send_prompt, GeminiClient, GenerationError, GenerationTransport,
};
use crate::github::{fetch_repository, GitHubApi, OctocrabApi};
use crate::input::RepositoryRef;
use crate::outcome::{GeneratedContent, RunOutcome};
use crate::prompt::PromptBuilder;
use chrono::Utc;
use std::fmt;
use tracing::{debug, error, info};

/// Pipeline stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Classifying,
    Generating,
    Done,
    Failed,
}

impl Stage {
    /// Returns the stage name as used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Classifying => "classifying",
            Self::Generating => "generating",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = %self, to = %next, "Stage transition");
        *self = next;
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches, classifies and generates a README for one repository.
pub struct Runner {
    config: RunnerConfig,
    github: Box<dyn GitHubApi>,
    generator: Option<Box<dyn GenerationTransport>>,
    prompts: PromptBuilder,
}

impl Runner {
    /// Builds a runner with the GitHub and Gemini HTTP clients.
    ///
    /// The generator configuration is only loaded, and the API key only
    /// required, when the run will actually call the generator.
    ///
    /// # Errors
    ///
    /// Returns an error if a client cannot be built, the config file is
    /// unreadable, or no API key is available outside dry-run mode.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let github = OctocrabApi::new(config.github_token())?;

        let generator: Option<Box<dyn GenerationTransport>> = if config.dry_run() {
            None
        } else {
            let settings = load_config(config.config_path())?.unwrap_or_default();
            let api_key = settings
                .resolve_api_key(config.api_key())
                .ok_or(GenerationError::MissingApiKey)?;
            let endpoint = settings.endpoint(&api_key)?;
            info!(model = settings.model(), "Using Gemini model");
            let client: Box<dyn GenerationTransport> =
                Box::new(GeminiClient::new(endpoint, settings.model())?);
            Some(client)
        };

        Ok(Self {
            config,
            github: Box::new(github),
            generator,
            prompts: PromptBuilder::new(),
        })
    }

    /// Builds a runner over caller-provided transports.
    #[must_use]
    pub fn with_transports(
        config: RunnerConfig,
        github: Box<dyn GitHubApi>,
        generator: Box<dyn GenerationTransport>,
    ) -> Self {
        Self {
            config,
            github,
            generator: Some(generator),
            prompts: PromptBuilder::new(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes the full pipeline for `repository`.
    ///
    /// In dry-run mode the outcome carries the rendered prompt instead of a README.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, prompt or generation error encountered.
    pub async fn run(&self, repository: &RepositoryRef) -> Result<RunOutcome, RunnerError> {
        let mut stage = Stage::Idle;
        let result = self.execute(repository, &mut stage).await;

        match &result {
            Ok(_) => stage.advance(Stage::Done),
            Err(e) => {
                error!(stage = %stage, repository = %repository, error = %e, "Run failed");
                stage.advance(Stage::Failed);
            }
        }
        result
    }

    async fn execute(
        &self,
        repository: &RepositoryRef,
        stage: &mut Stage,
    ) -> Result<RunOutcome, RunnerError> {
        stage.advance(Stage::Fetching);
        let facts =
            fetch_repository(self.github.as_ref(), &repository.owner, &repository.name).await?;

        stage.advance(Stage::Classifying);
        let detected = classify(&facts);
        debug!(indicators = ?matched_indicators(&facts), "Classifier indicators");
        let archetype = self.config.archetype().unwrap_or(detected);
        let auto_detected = self.config.archetype().is_none();
        info!(
            archetype = %archetype,
            detected = %detected,
            auto_detected,
            "Archetype selected"
        );

        let prompt = render_prompt(&self.prompts, &facts, archetype, Utc::now())?;

        let content = if self.config.dry_run() {
            info!("Dry run, skipping generation");
            GeneratedContent::Prompt(prompt)
        } else {
            let generator = self
                .generator
                .as_deref()
                .ok_or(GenerationError::MissingApiKey)?;
            stage.advance(Stage::Generating);
            GeneratedContent::Readme(send_prompt(generator, prompt).await?)
        };

        Ok(RunOutcome {
            repository: repository.clone(),
            archetype,
            detected,
            auto_detected,
            content,
        })
    }
}
