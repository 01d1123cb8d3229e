//! Training-plan bridge
//!
//! Turns a gap record's recommendation into a planned training record.
//! Identifiers and the creation day are passed in, so drafting is
//! deterministic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gaps::GapRecord;
use crate::training::{TrainingCollection, TrainingPatch, TrainingRecord, TrainingStatus};
use crate::types::TrainingId;

/// Fixed fields of a drafted plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTemplate {
    pub provider: String,
    pub duration_hours: u32,
    pub category: String,
}

impl Default for PlanTemplate {
    fn default() -> Self {
        Self {
            provider: "Internal Training Program".to_string(),
            duration_hours: 20,
            category: "Skills Gap".to_string(),
        }
    }
}

impl PlanTemplate {
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_duration_hours(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Build, without storing, the planned training record for `gap`.
pub fn draft_plan(gap: &GapRecord, id: TrainingId, today: NaiveDate, template: &PlanTemplate) -> TrainingRecord {
    let title = if gap.recommended_training.trim().is_empty() {
        format!("{} Training", gap.skill_name)
    } else {
        gap.recommended_training.clone()
    };

    TrainingRecord {
        id,
        title,
        provider: template.provider.clone(),
        status: TrainingStatus::Planned,
        start_date: Some(today),
        completion_date: None,
        duration_hours: template.duration_hours,
        category: template.category.clone(),
        description: Some(format!(
            "Training plan to close the {} gap ({} -> {})",
            gap.skill_name,
            gap.current_level.title(),
            gap.required_level.title()
        )),
        certificate_url: None,
        origin: Some(gap.requirement_id.clone()),
    }
}

/// Append a new planned record for `gap`.
///
/// Calling this twice for the same gap creates two records. Use
/// [`upsert_plan_for_gap`] to keep one plan per requirement.
pub fn create_plan_from_gap(
    training: &mut TrainingCollection,
    gap: &GapRecord,
    id: TrainingId,
    today: NaiveDate,
    template: &PlanTemplate,
) -> Result<TrainingId> {
    let plan = draft_plan(gap, id, today, template);
    let id = training.insert(plan)?;
    tracing::info!("Created training plan {} for {}", id, gap.skill_name);
    Ok(id)
}

/// Create the plan for `gap` unless one already exists for its requirement.
///
/// An existing plan is refreshed with the template's fields and keeps its
/// identifier, status and dates. Returns the plan's identifier.
pub fn upsert_plan_for_gap(
    training: &mut TrainingCollection,
    gap: &GapRecord,
    id: TrainingId,
    today: NaiveDate,
    template: &PlanTemplate,
) -> Result<TrainingId> {
    let existing = training
        .find_by_origin(&gap.requirement_id)
        .map(|record| record.id.clone());

    match existing {
        Some(existing) => {
            let draft = draft_plan(gap, existing.clone(), today, template);
            let patch = TrainingPatch {
                title: Some(draft.title),
                provider: Some(draft.provider),
                duration_hours: Some(draft.duration_hours),
                category: Some(draft.category),
                description: draft.description,
                ..TrainingPatch::default()
            };
            training.update(&existing, &patch)?;
            tracing::debug!("Training plan {} already covers {}", existing, gap.skill_name);
            Ok(existing)
        }
        None => create_plan_from_gap(training, gap, id, today, template),
    }
}
