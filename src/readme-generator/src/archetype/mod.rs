//! README archetypes.
//!
//! An archetype selects which instruction block drives generation, and carries
//! the display name, description and icon shown to the user.

mod instructions;

use crate::input::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight documentation styles a README can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Every section; the fallback when no indicator matches.
    Comprehensive,
    /// Product features, demos and user acquisition.
    Startup,
    /// Contribution guidelines, community and collaboration.
    OpenSource,
    /// API documentation, installation guides and usage examples.
    Library,
    /// Skills, technologies used and live demos.
    Portfolio,
    /// Methodology, citations and academic formatting.
    Academic,
    /// Compliance, security and support.
    Enterprise,
    /// Only the essentials. Never selected automatically.
    Minimalist,
}

/// Static description of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    /// Stable identifier, e.g. "open_source".
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// One-line description of what the README emphasizes.
    pub description: &'static str,

    /// Icon shown next to the name.
    pub icon: &'static str,

    /// Instruction block appended to the generation prompt.
    pub instructions: &'static str,
}

const COMPREHENSIVE: ArchetypeProfile = ArchetypeProfile {
    id: "comprehensive",
    name: "Comprehensive (All Sections)",
    description: "Complete README with all possible sections - best for established projects",
    icon: "📚",
    instructions: instructions::COMPREHENSIVE,
};

const STARTUP: ArchetypeProfile = ArchetypeProfile {
    id: "startup",
    name: "Startup/MVP",
    description: "Focus on product features, demo links, and user acquisition",
    icon: "🚀",
    instructions: instructions::STARTUP,
};

const OPEN_SOURCE: ArchetypeProfile = ArchetypeProfile {
    id: "open_source",
    name: "Open Source Project",
    description: "Emphasizes contribution guidelines, community, and collaboration",
    icon: "🌟",
    instructions: instructions::OPEN_SOURCE,
};

const LIBRARY: ArchetypeProfile = ArchetypeProfile {
    id: "library",
    name: "Library/Package",
    description: "API documentation, installation guides, and usage examples",
    icon: "📦",
    instructions: instructions::LIBRARY,
};

const PORTFOLIO: ArchetypeProfile = ArchetypeProfile {
    id: "portfolio",
    name: "Portfolio Project",
    description: "Showcase skills, technologies used, and live demos",
    icon: "💼",
    instructions: instructions::PORTFOLIO,
};

const ACADEMIC: ArchetypeProfile = ArchetypeProfile {
    id: "academic",
    name: "Academic/Research",
    description: "Research methodology, citations, and academic formatting",
    icon: "🎓",
    instructions: instructions::ACADEMIC,
};

const ENTERPRISE: ArchetypeProfile = ArchetypeProfile {
    id: "enterprise",
    name: "Enterprise/Corporate",
    description: "Professional documentation with compliance and security focus",
    icon: "🏢",
    instructions: instructions::ENTERPRISE,
};

const MINIMALIST: ArchetypeProfile = ArchetypeProfile {
    id: "minimalist",
    name: "Minimalist",
    description: "Clean, simple README with just the essentials",
    icon: "✨",
    instructions: instructions::MINIMALIST,
};

impl Archetype {
    /// All archetypes, in display order.
    pub const ALL: [Archetype; 8] = [
        Archetype::Comprehensive,
        Archetype::Startup,
        Archetype::OpenSource,
        Archetype::Library,
        Archetype::Portfolio,
        Archetype::Academic,
        Archetype::Enterprise,
        Archetype::Minimalist,
    ];

    /// Returns the static profile for this archetype.
    #[must_use]
    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Self::Comprehensive => &COMPREHENSIVE,
            Self::Startup => &STARTUP,
            Self::OpenSource => &OPEN_SOURCE,
            Self::Library => &LIBRARY,
            Self::Portfolio => &PORTFOLIO,
            Self::Academic => &ACADEMIC,
            Self::Enterprise => &ENTERPRISE,
            Self::Minimalist => &MINIMALIST,
        }
    }

    /// Returns the stable identifier, e.g. "open_source".
    #[must_use]
    pub fn id(self) -> &'static str {
        self.profile().id
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Archetype {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::UnknownArchetype(s.to_string()))
    }
}
