//! Skills-gap analysis
//!
//! Compares required proficiency levels from a requirement catalog against
//! the levels recorded in a skill inventory, producing one gap record per
//! requirement with a gap percentage and the requirement's priority tier.

pub mod analyzer;
pub mod scoring;
pub mod suggestions;

// Public exports
pub use analyzer::{evaluate, EngineConfig, GapEngine, GapRecord, MatchStrategy};
pub use scoring::{by_severity, compute_gap, gap_percentage, score_requirement, GapQueue};
pub use suggestions::{generate_all_suggestions, generate_suggestion, GapSuggestion, SuggestedAction};
