#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod analysis;
pub mod archetype;
pub mod classify;
pub mod facts;
pub mod generator;
pub mod github;
pub mod input;
pub mod outcome;
pub mod prompt;
pub mod runner;
pub mod transport;

pub use analysis::{Complexity, Installation, RepositoryAnalysis};
pub use archetype::{Archetype, ArchetypeProfile};
pub use classify::{classify, matched_indicators, Indicator};
pub use facts::RepositoryFacts;
pub use generator::{
    generate, interpret_response, load_config, ConfigError, GeminiClient, GenerateContentRequest,
    GenerationError, GenerationTransport, GeneratorConfig,
};
pub use github::{fetch_repository, FetchError, GitHubApi, OctocrabApi};
pub use input::{parse_archetype_override, InputError, RepositoryRef};
pub use outcome::{GeneratedContent, OutputError, RunOutcome};
pub use prompt::{create_handlebars_registry, PromptBuilder, PromptError};
pub use runner::{Runner, RunnerConfig, RunnerError, Stage};
pub use transport::ApiResponse;
