//! Recommended actions for gap records
//!
//! Each record maps to one action depending on whether the skill is present
//! in the inventory and whether a gap remains.

use serde::{Deserialize, Serialize};

use crate::catalog::Priority;
use crate::level::Level;
use crate::types::RequirementId;

use super::scoring::by_severity;
use super::GapRecord;

/// Suggested action for closing a gap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum SuggestedAction {
    /// Skill absent from the inventory: take the recommended training
    Enroll { training: String },
    /// Skill present below the required level
    Upskill {
        from: Level,
        to: Level,
        training: String,
    },
    /// Requirement already met
    Maintain,
}

/// Action suggestion for one gap record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSuggestion {
    pub requirement_id: RequirementId,
    pub skill_name: String,
    pub action: SuggestedAction,
    /// One-line human-readable rationale
    pub rationale: String,
    pub priority: Priority,
    pub gap_percentage: u32,
}

/// Suggest an action for a single record.
pub fn generate_suggestion(record: &GapRecord) -> GapSuggestion {
    let action = if record.gap == 0 {
        SuggestedAction::Maintain
    } else if !record.present_in_inventory {
        SuggestedAction::Enroll {
            training: record.recommended_training.clone(),
        }
    } else {
        SuggestedAction::Upskill {
            from: record.current_level,
            to: record.required_level,
            training: record.recommended_training.clone(),
        }
    };

    let rationale = generate_rationale(&action, record);

    GapSuggestion {
        requirement_id: record.requirement_id.clone(),
        skill_name: record.skill_name.clone(),
        action,
        rationale,
        priority: record.priority,
        gap_percentage: record.gap_percentage,
    }
}

fn generate_rationale(action: &SuggestedAction, record: &GapRecord) -> String {
    match action {
        SuggestedAction::Enroll { training } => format!(
            "{} is not in the inventory; enroll in '{}' to reach {}",
            record.skill_name,
            training,
            record.required_level.title()
        ),
        SuggestedAction::Upskill { from, to, training } => format!(
            "Raise {} from {} to {} ({}% gap) via '{}'",
            record.skill_name,
            from.title(),
            to.title(),
            record.gap_percentage,
            training
        ),
        SuggestedAction::Maintain => format!(
            "{} meets the required {} level",
            record.skill_name,
            record.required_level.title()
        ),
    }
}

/// Suggestions for every record with an open gap, most severe first.
pub fn generate_all_suggestions(records: &[GapRecord]) -> Vec<GapSuggestion> {
    let open: Vec<GapRecord> = records.iter().filter(|r| r.gap > 0).cloned().collect();

    by_severity(&open).iter().map(generate_suggestion).collect()
}
