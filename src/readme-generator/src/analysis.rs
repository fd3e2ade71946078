//! Derived values describing a repository for the generation prompt.

use crate::facts::{PackageManifest, RepositoryFacts};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Number of languages listed in the distribution.
const MAX_DISTRIBUTION_LANGUAGES: usize = 5;

/// Days since the last update within which a repository counts as active.
const ACTIVE_WINDOW_DAYS: i64 = 90;

/// Manifest scripts listed as common commands.
const MAX_SCRIPT_COMMANDS: usize = 3;

/// Dependency names mapped to the framework they indicate.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("next", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("svelte", "Svelte"),
    ("fastapi", "FastAPI"),
    ("django", "Django"),
    ("flask", "Flask"),
];

/// File name fragments mapped to the deployment target they indicate.
const DEPLOYMENT_FILES: &[(&str, &str)] = &[
    ("Dockerfile", "Docker"),
    ("docker-compose", "Docker Compose"),
    ("vercel.json", "Vercel"),
    ("netlify.toml", "Netlify"),
    (".github/workflows", "GitHub Actions"),
    ("heroku", "Heroku"),
];

/// Coarse project size, from the number of top-level entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// More than 50 entries is complex, more than 20 is medium.
    #[must_use]
    pub fn from_file_count(count: usize) -> Self {
        if count > 50 {
            Self::Complex
        } else if count > 20 {
            Self::Medium
        } else {
            Self::Simple
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Medium => "Medium",
            Self::Complex => "Complex",
        }
    }
}

/// How the project is installed, and the commands usually run afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Installation {
    /// Package tool label, e.g. "npm/yarn". Empty when nothing was detected.
    pub method: String,

    /// Comma-separated example commands. Empty when nothing was detected.
    pub commands: String,
}

impl Installation {
    /// Picks the first match of package.json, requirements.txt, Gemfile,
    /// composer.json and Makefile, in that order.
    #[must_use]
    pub fn detect(facts: &RepositoryFacts) -> Self {
        let presence = &facts.presence;
        let (method, commands) = if presence.package_json {
            ("npm/yarn", script_commands(facts.manifest.as_ref()))
        } else if presence.requirements {
            ("pip", "python main.py or python app.py".to_string())
        } else if presence.gemfile {
            ("bundle", "bundle exec ruby app.rb".to_string())
        } else if presence.composer_json {
            ("composer", "php index.php".to_string())
        } else if presence.makefile {
            ("make", "make, make install, make run".to_string())
        } else {
            return Self::default();
        };

        Self {
            method: method.to_string(),
            commands,
        }
    }
}

fn script_commands(manifest: Option<&PackageManifest>) -> String {
    manifest
        .map(|manifest| {
            manifest
                .scripts
                .iter()
                .take(MAX_SCRIPT_COMMANDS)
                .map(|script| format!("npm run {}", script.name))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

/// Values derived from [`RepositoryFacts`] for the prompt's analysis section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryAnalysis {
    /// Top languages with their share of bytes, e.g. "Rust (80.0%), C (20.0%)".
    pub language_distribution: String,
    /// All languages, largest first.
    pub tech_stack: String,
    pub installation: Installation,
    pub complexity: Complexity,
    pub file_count: usize,
    pub actively_maintained: bool,
    pub has_tests: bool,
    pub has_ci: bool,
    pub has_docs: bool,
    pub is_monorepo: bool,
    pub has_docker: bool,
    pub has_api: bool,
    pub frameworks: Vec<String>,
    pub deployment: Vec<String>,
}

impl RepositoryAnalysis {
    /// Analyzes `facts`; `now` anchors the activity window.
    #[must_use]
    pub fn new(facts: &RepositoryFacts, now: DateTime<Utc>) -> Self {
        let manifest = facts.manifest.as_ref();
        let files_contain = |fragments: &[&str]| {
            facts
                .files
                .iter()
                .any(|file| fragments.iter().any(|fragment| file.contains(fragment)))
        };

        Self {
            language_distribution: language_distribution(facts),
            tech_stack: languages_by_size(facts)
                .into_iter()
                .map(|(language, _)| language)
                .collect::<Vec<_>>()
                .join(", "),
            installation: Installation::detect(facts),
            complexity: Complexity::from_file_count(facts.files.len()),
            file_count: facts.files.len(),
            actively_maintained: is_actively_maintained(facts.updated_at, now),
            has_tests: files_contain(&["test", "spec"])
                || (facts.presence.package_json
                    && manifest.is_some_and(|m| m.has_script("test"))),
            has_ci: files_contain(&[".github", ".travis", "jenkins"]),
            has_docs: files_contain(&["docs", "documentation"]),
            is_monorepo: files_contain(&["packages", "workspaces"])
                || manifest.is_some_and(|m| m.workspaces),
            has_docker: facts.presence.dockerfile || files_contain(&["docker-compose"]),
            has_api: facts
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains("api"))
                || files_contain(&["swagger", "openapi"]),
            frameworks: detect_frameworks(manifest),
            deployment: detect_deployment(&facts.files, manifest),
        }
    }
}

/// Languages sorted by byte count, largest first; ties keep name order.
fn languages_by_size(facts: &RepositoryFacts) -> Vec<(&str, u64)> {
    let mut languages: Vec<(&str, u64)> = facts
        .languages
        .iter()
        .map(|(language, bytes)| (language.as_str(), *bytes))
        .collect();
    languages.sort_by(|a, b| b.1.cmp(&a.1));
    languages
}

/// Formats the top five languages with their percentage of all bytes.
///
/// Returns "Unknown" when there is no language data.
#[must_use]
pub fn language_distribution(facts: &RepositoryFacts) -> String {
    if facts.languages.is_empty() {
        return "Unknown".to_string();
    }

    let total: u64 = facts.languages.values().sum();
    languages_by_size(facts)
        .into_iter()
        .take(MAX_DISTRIBUTION_LANGUAGES)
        .map(|(language, bytes)| {
            let percentage = if total == 0 {
                0.0
            } else {
                bytes as f64 / total as f64 * 100.0
            };
            format!("{language} ({percentage:.1}%)")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// True if `updated_at` falls within the last 90 days before `now`.
#[must_use]
pub fn is_actively_maintained(updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    updated_at.is_some_and(|updated| updated > now - Duration::days(ACTIVE_WINDOW_DAYS))
}

fn detect_frameworks(manifest: Option<&PackageManifest>) -> Vec<String> {
    let Some(manifest) = manifest else {
        return Vec::new();
    };
    FRAMEWORKS
        .iter()
        .filter(|(dependency, _)| manifest.dependencies.contains(*dependency))
        .map(|(_, framework)| framework.to_string())
        .collect()
}

fn detect_deployment(files: &[String], manifest: Option<&PackageManifest>) -> Vec<String> {
    let mut targets: Vec<String> = DEPLOYMENT_FILES
        .iter()
        .filter(|(fragment, _)| files.iter().any(|file| file.contains(fragment)))
        .map(|(_, target)| target.to_string())
        .collect();

    if manifest.is_some_and(|m| m.has_script("build")) {
        targets.push("Static Build".to_string());
    }
    targets
}
