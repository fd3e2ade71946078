//! Generation prompt construction.
//!
//! Repository facts, the derived analysis and the archetype's instruction
//! block are rendered into one natural-language request with Handlebars.

mod error;

pub use error::PromptError;

use crate::analysis::RepositoryAnalysis;
use crate::archetype::Archetype;
use crate::facts::RepositoryFacts;
use chrono::{DateTime, SecondsFormat, Utc};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Prompt layout; `{{instructions}}` receives the archetype's block.
const PROMPT_TEMPLATE: &str = include_str!("template.hbs");

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (the prompt is plain text and Markdown)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders generation prompts.
pub struct PromptBuilder {
    handlebars: Handlebars<'static>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Creates a new prompt builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the prompt for `facts` in the style of `archetype`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn build(
        &self,
        facts: &RepositoryFacts,
        analysis: &RepositoryAnalysis,
        archetype: Archetype,
    ) -> Result<String, PromptError> {
        let data = prompt_data(facts, analysis, archetype);
        Ok(self.handlebars.render_template(PROMPT_TEMPLATE, &data)?)
    }
}

fn prompt_data(
    facts: &RepositoryFacts,
    analysis: &RepositoryAnalysis,
    archetype: Archetype,
) -> Value {
    let profile = archetype.profile();

    json!({
        "template_name": profile.name,
        "name": facts.name,
        "description": facts.description.as_deref().unwrap_or("No description provided"),
        "author": facts.owner,
        "url": facts.html_url,
        "primary_language": facts.language.as_deref().unwrap_or("Unknown"),
        "language_distribution": analysis.language_distribution,
        "tech_stack": analysis.tech_stack,
        "homepage": facts.homepage.as_deref().unwrap_or("N/A"),
        "stars": facts.stars,
        "forks": facts.forks,
        "open_issues": facts.open_issues,
        "created_at": timestamp(facts.created_at),
        "updated_at": timestamp(facts.updated_at),
        "latest_release": facts.latest_release().unwrap_or("No releases"),
        "license": facts.license.as_deref().unwrap_or("Not specified"),
        "topics": join_or(&facts.topics, "None"),
        "contributors": join_or(&facts.contributors, "No contributors data available"),
        "complexity": analysis.complexity.as_str(),
        "file_count": analysis.file_count,
        "installation_method": analysis.installation.method,
        "common_commands": analysis.installation.commands,
        "has_tests": analysis.has_tests,
        "has_ci": analysis.has_ci,
        "has_docs": analysis.has_docs,
        "is_monorepo": analysis.is_monorepo,
        "has_docker": analysis.has_docker,
        "has_api": analysis.has_api,
        "frameworks": join_or(&analysis.frameworks, "None detected"),
        "deployment": join_or(&analysis.deployment, "Not specified"),
        "actively_maintained": analysis.actively_maintained,
        "instructions": profile.instructions,
    })
}

fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "Unknown".to_string(),
        |value| value.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}
