//! Fixed persona vocabularies — traits, gauge levels, preferences, genders.
//!
//! Every generated persona draws from these closed sets; nothing here is
//! configurable at runtime. The identifiers double as display labels in the
//! chart and as tokens in the image prompt, so they stay lowercase and
//! hyphenated.

use serde::{Deserialize, Serialize};

/// The 8 learning-related traits a persona can exhibit.
///
/// Each generation samples 3 of these without replacement.
pub const PERSONA_TRAITS: [&str; 8] = [
    "focus",
    "device-familiarity",
    "prior-lesson-understanding",
    "task-persistence",
    "academic-stress",
    "self-regulation",
    "home-environment",
    "academic-achievement",
];

/// Number of traits sampled per persona.
pub const TRAITS_PER_PERSONA: usize = 3;

/// Intensity gauge for a sampled trait, levels 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl GaugeLevel {
    /// All levels in ascending order.
    pub const ALL: [GaugeLevel; 5] = [
        GaugeLevel::VeryLow,
        GaugeLevel::Low,
        GaugeLevel::Moderate,
        GaugeLevel::High,
        GaugeLevel::VeryHigh,
    ];

    /// Numeric level in 1..=5.
    pub fn level(self) -> u8 {
        match self {
            GaugeLevel::VeryLow => 1,
            GaugeLevel::Low => 2,
            GaugeLevel::Moderate => 3,
            GaugeLevel::High => 4,
            GaugeLevel::VeryHigh => 5,
        }
    }

    /// Parse a numeric level; `None` outside 1..=5.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(GaugeLevel::VeryLow),
            2 => Some(GaugeLevel::Low),
            3 => Some(GaugeLevel::Moderate),
            4 => Some(GaugeLevel::High),
            5 => Some(GaugeLevel::VeryHigh),
            _ => None,
        }
    }

    /// Textual label used in prompts and captions.
    pub fn label(self) -> &'static str {
        match self {
            GaugeLevel::VeryLow => "very low",
            GaugeLevel::Low => "low",
            GaugeLevel::Moderate => "moderate",
            GaugeLevel::High => "high",
            GaugeLevel::VeryHigh => "very high",
        }
    }
}

/// How the student prefers to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPreference {
    Individual,
    Cooperative,
}

impl LearningPreference {
    pub const ALL: [LearningPreference; 2] =
        [LearningPreference::Individual, LearningPreference::Cooperative];

    pub fn label(self) -> &'static str {
        match self {
            LearningPreference::Individual => "individual",
            LearningPreference::Cooperative => "cooperative",
        }
    }
}

/// Gender label used in the caricature prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Boy, Gender::Girl];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
