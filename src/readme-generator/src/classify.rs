//! Archetype classification.
//!
//! Each [`Indicator`] is an independent boolean heuristic over the repository
//! facts. [`RULES`] pairs indicators with the archetype they select and is
//! evaluated top to bottom; the first indicator that holds decides the result.

use crate::archetype::Archetype;
use crate::facts::RepositoryFacts;
use serde::Serialize;

/// A heuristic hint about what kind of project a repository is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Library,
    Framework,
    WebApp,
    MobileApp,
    DataScience,
    DevTool,
    Game,
    Academic,
    Enterprise,
    Portfolio,
}

/// Priority-ordered classification rules. Several indicators deliberately
/// share an archetype.
pub const RULES: &[(Indicator, Archetype)] = &[
    (Indicator::Library, Archetype::Library),
    (Indicator::Academic, Archetype::Academic),
    (Indicator::Enterprise, Archetype::Enterprise),
    (Indicator::Portfolio, Archetype::Portfolio),
    (Indicator::DataScience, Archetype::Library),
    (Indicator::Framework, Archetype::OpenSource),
    (Indicator::DevTool, Archetype::OpenSource),
    (Indicator::WebApp, Archetype::Startup),
    (Indicator::MobileApp, Archetype::Startup),
    (Indicator::Game, Archetype::Portfolio),
];

/// Archetype chosen when no indicator holds.
pub const FALLBACK: Archetype = Archetype::Comprehensive;

/// Classifies a repository into exactly one archetype.
///
/// Pure and deterministic: the same facts always give the same archetype.
#[must_use]
pub fn classify(facts: &RepositoryFacts) -> Archetype {
    let signals = Signals::new(facts);
    RULES
        .iter()
        .find(|(indicator, _)| indicator.holds(&signals))
        .map_or(FALLBACK, |&(_, archetype)| archetype)
}

/// Returns every indicator that holds, in rule order.
#[must_use]
pub fn matched_indicators(facts: &RepositoryFacts) -> Vec<Indicator> {
    let signals = Signals::new(facts);
    RULES
        .iter()
        .map(|&(indicator, _)| indicator)
        .filter(|indicator| indicator.holds(&signals))
        .collect()
}

/// Normalized views of the facts the indicators read.
struct Signals<'a> {
    description: String,
    name: String,
    topics: Vec<String>,
    facts: &'a RepositoryFacts,
}

impl<'a> Signals<'a> {
    fn new(facts: &'a RepositoryFacts) -> Self {
        Self {
            description: facts
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            name: facts.name.to_lowercase(),
            topics: facts.topics.iter().map(|t| t.to_lowercase()).collect(),
            facts,
        }
    }

    fn description_has(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.description.contains(needle))
    }

    fn name_has(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.name.contains(needle))
    }

    fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    fn has_language(&self, languages: &[&str]) -> bool {
        languages
            .iter()
            .any(|language| self.facts.has_language(language))
    }
}

impl Indicator {
    fn holds(self, s: &Signals<'_>) -> bool {
        let presence = &s.facts.presence;
        match self {
            Self::Library => {
                s.description_has(&["library", "package", "sdk", "api"])
                    || s.name_has(&["lib", "sdk"])
            }
            Self::Framework => {
                s.description_has(&["framework", "boilerplate", "template", "starter"])
            }
            Self::WebApp => {
                s.description_has(&["web app", "website", "dashboard"])
                    || s.has_language(&["JavaScript", "TypeScript", "HTML"])
            }
            Self::MobileApp => {
                s.description_has(&["mobile", "android", "ios", "react native"])
                    || s.has_language(&["Swift", "Kotlin"])
            }
            Self::DataScience => {
                s.description_has(&["data", "machine learning", "ai", "analysis"])
                    || (s.has_language(&["Python"]) && presence.requirements)
            }
            Self::DevTool => {
                s.description_has(&["tool", "cli", "utility", "dev"])
                    || s.name_has(&["cli", "tool"])
            }
            Self::Game => {
                s.description_has(&["game", "gaming"])
                    || s.has_topic("game")
                    || s.has_language(&["C#", "C++"])
            }
            Self::Academic => {
                s.description_has(&["research", "paper", "thesis", "academic"])
                    || s.has_topic("research")
            }
            Self::Enterprise => {
                (presence.dockerfile && s.has_language(&["Java"]))
                    || s.description_has(&["enterprise", "corporate", "business"])
            }
            Self::Portfolio => {
                s.description_has(&["portfolio", "showcase"]) || s.name_has(&["portfolio"])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::PresenceFlags;

    fn facts(name: &str, description: &str) -> RepositoryFacts {
        RepositoryFacts {
            owner: "octocat".to_string(),
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            ..Default::default()
        }
    }

    fn with_languages(mut facts: RepositoryFacts, languages: &[&str]) -> RepositoryFacts {
        for language in languages {
            facts.languages.insert(language.to_string(), 100);
        }
        facts
    }

    #[test]
    fn empty_facts_fall_back_to_comprehensive() {
        assert_eq!(classify(&facts("Hello-World", "")), Archetype::Comprehensive);
    }

    #[test]
    fn library_beats_game() {
        let facts = facts("pong", "A game engine library");
        assert_eq!(
            matched_indicators(&facts),
            [Indicator::Library, Indicator::Game]
        );
        assert_eq!(classify(&facts), Archetype::Library);
    }

    #[test]
    fn library_detected_from_name() {
        assert_eq!(classify(&facts("zlib", "")), Archetype::Library);
        assert_eq!(classify(&facts("aws-sdk-rust", "")), Archetype::Library);
    }

    #[test]
    fn academic_from_topic_is_case_insensitive() {
        let mut facts = facts("thesis-code", "");
        facts.topics = vec!["Research".to_string()];
        assert_eq!(classify(&facts), Archetype::Academic);
    }

    #[test]
    fn enterprise_needs_java_and_dockerfile() {
        let java = with_languages(facts("billing", ""), &["Java"]);
        assert_eq!(classify(&java), Archetype::Comprehensive);

        let mut dockerized = java.clone();
        dockerized.presence = PresenceFlags {
            dockerfile: true,
            ..Default::default()
        };
        assert_eq!(classify(&dockerized), Archetype::Enterprise);
    }

    #[test]
    fn portfolio_from_name() {
        assert_eq!(classify(&facts("my-portfolio", "")), Archetype::Portfolio);
    }

    #[test]
    fn python_with_requirements_maps_to_library() {
        let mut facts = with_languages(facts("notebooks", ""), &["Python"]);
        facts.presence.requirements = true;
        assert_eq!(classify(&facts), Archetype::Library);
    }

    #[test]
    fn framework_and_dev_tool_map_to_open_source() {
        assert_eq!(
            classify(&facts("starter-kit", "A starter for new services")),
            Archetype::OpenSource
        );
        assert_eq!(classify(&facts("ripgrep", "Fast search tool")), Archetype::OpenSource);
    }

    #[test]
    fn web_and_mobile_map_to_startup() {
        assert_eq!(
            classify(&with_languages(facts("shop", ""), &["TypeScript"])),
            Archetype::Startup
        );
        assert_eq!(
            classify(&with_languages(facts("fitness", ""), &["Kotlin"])),
            Archetype::Startup
        );
    }

    #[test]
    fn game_maps_to_portfolio() {
        let mut facts = facts("pong", "");
        facts.topics = vec!["game".to_string()];
        assert_eq!(classify(&facts), Archetype::Portfolio);

        let cpp = with_languages(self::facts("engine3d", ""), &["C++"]);
        assert_eq!(classify(&cpp), Archetype::Portfolio);
    }

    #[test]
    fn language_membership_is_case_sensitive() {
        let facts = with_languages(facts("shop", ""), &["javascript"]);
        assert_eq!(classify(&facts), Archetype::Comprehensive);
    }

    #[test]
    fn classification_is_deterministic() {
        let facts = with_languages(facts("site", "Company website"), &["HTML", "CSS"]);
        let first = classify(&facts);
        for _ in 0..10 {
            assert_eq!(classify(&facts), first);
        }
        assert_ne!(first, Archetype::Minimalist);
    }
}
