//! Proficiency level scale
//!
//! A closed four-tier ordinal scale with an `Unknown` sink for unrecognized
//! labels. Two numeric mappings exist:
//!
//! - [`Level::score`]: canonical gap-engine score (25/50/75/100). All gap
//!   arithmetic uses this one.
//! - [`Level::progress`]: legacy progress-bar percentage (33/66/100) kept for
//!   display only. The legacy bar never had an `Advanced` tier; it renders
//!   at 83, halfway between intermediate and expert.
//!
//! Parsing is case-insensitive and never fails: anything outside the four
//! labels becomes `Unknown`, which scores 0 and so maximizes the computed gap.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered proficiency level.
///
/// `Unknown < Beginner < Intermediate < Advanced < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Missing or unrecognized label
    #[default]
    Unknown,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    /// The four recognized tiers, lowest first.
    pub const TIERS: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Expert,
    ];

    /// Parse a label case-insensitively. Unrecognized input yields `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            "expert" => Level::Expert,
            _ => Level::Unknown,
        }
    }

    /// Canonical numeric score used by the gap engine.
    pub fn score(self) -> u32 {
        match self {
            Level::Beginner => 25,
            Level::Intermediate => 50,
            Level::Advanced => 75,
            Level::Expert => 100,
            Level::Unknown => 0,
        }
    }

    /// Legacy progress-bar percentage. Display only; never feed into gap math.
    pub fn progress(self) -> u32 {
        match self {
            Level::Beginner => 33,
            Level::Intermediate => 66,
            Level::Advanced => 83,
            Level::Expert => 100,
            Level::Unknown => 0,
        }
    }

    /// Lowercase label as stored in records.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Expert => "expert",
            Level::Unknown => "unknown",
        }
    }

    /// Capitalized label for human-facing text.
    pub fn title(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
            Level::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != Level::Unknown
    }
}

/// Score of a free-text label. Unknown labels score 0.
pub fn score_of(label: &str) -> u32 {
    Level::parse(label).score()
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Any scalar a fixture file may hold where a level label belongs.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Label(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Absent/null, numbers and odd labels all degrade to Unknown
        let raw = Option::<RawLevel>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawLevel::Label(label)) => Level::parse(&label),
            Some(RawLevel::Other(_)) | None => Level::Unknown,
        })
    }
}
