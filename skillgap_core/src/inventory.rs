//! Skill inventory
//!
//! The proficiency records of one user or team, in the order they were
//! recorded. Gap scoring reads the inventory as an immutable snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CoreError, Result};
use crate::level::Level;
use crate::types::SkillId;

/// Filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// One proficiency record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    /// Free text, matched against requirement names
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assessed: Option<NaiveDate>,
    #[serde(default)]
    pub verified: bool,
    /// Shared skill-taxonomy identifier, when the record carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_id: Option<String>,
}

/// A skill before it has an identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub years_experience: Option<f64>,
    #[serde(default)]
    pub last_assessed: Option<NaiveDate>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub taxonomy_id: Option<String>,
}

impl NewSkill {
    pub fn new(name: impl Into<String>, category: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level,
            ..Self::default()
        }
    }

    /// Attach an identifier.
    pub fn with_id(self, id: SkillId) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            level: self.level,
            years_experience: self.years_experience,
            last_assessed: self.last_assessed,
            verified: self.verified,
            taxonomy_id: self.taxonomy_id,
        }
    }
}

/// Partial update for a [`Skill`]. `None` leaves the field unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub years_experience: Option<f64>,
    pub last_assessed: Option<NaiveDate>,
    pub verified: Option<bool>,
    pub taxonomy_id: Option<String>,
}

impl Record for Skill {
    type Id = SkillId;
    type Patch = SkillPatch;

    fn id(&self) -> &SkillId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("skill name is empty".to_string()));
        }
        match self.years_experience {
            Some(years) if !(years >= 0.0) => Err(CoreError::InvalidInput(format!(
                "years of experience must be non-negative, got {}",
                years
            ))),
            _ => Ok(()),
        }
    }

    fn apply(&mut self, patch: &SkillPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(years) = patch.years_experience {
            self.years_experience = Some(years);
        }
        if let Some(date) = patch.last_assessed {
            self.last_assessed = Some(date);
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
        if let Some(taxonomy_id) = &patch.taxonomy_id {
            self.taxonomy_id = Some(taxonomy_id.clone());
        }
    }
}

/// Skill inventory of a user or team.
pub type SkillInventory = Collection<Skill>;

/// Per-category rollup for the skills page.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    /// Mean legacy progress over the category's skills
    pub average_progress: f64,
}

impl Collection<Skill> {
    /// Record a new skill under a fresh identifier.
    pub fn add(&mut self, skill: NewSkill) -> Result<SkillId> {
        self.insert(skill.with_id(SkillId::new()))
    }

    /// Number of verified skills.
    pub fn verified_count(&self) -> usize {
        self.iter().filter(|s| s.verified).count()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for skill in self.iter() {
            if !seen.contains(&skill.category) {
                seen.push(skill.category.clone());
            }
        }
        seen
    }

    /// Count and mean progress for each category.
    ///
    /// Categories with no skills report an average of 0.
    pub fn category_summaries(&self, categories: &[&str]) -> Vec<CategorySummary> {
        categories
            .iter()
            .map(|category| {
                let progress: Vec<u32> = self
                    .iter()
                    .filter(|s| s.category == *category)
                    .map(|s| s.level.progress())
                    .collect();
                let total: u32 = progress.iter().sum();
                CategorySummary {
                    category: category.to_string(),
                    count: progress.len(),
                    average_progress: total as f64 / progress.len().max(1) as f64,
                }
            })
            .collect()
    }

    /// Skills whose name contains `term` (case-insensitive), optionally
    /// restricted to one category. `"all"` disables the category filter.
    pub fn search(&self, term: &str, category: &str) -> Vec<&Skill> {
        let term = term.to_lowercase();
        self.iter()
            .filter(|s| s.name.to_lowercase().contains(&term))
            .filter(|s| category == ALL_CATEGORIES || s.category == category)
            .collect()
    }
}
