//! Gap scoring engine core types
//!
//! Joins a skill inventory against a requirement catalog, one gap record per
//! requirement. Evaluation is a pure function of its inputs and never fails:
//! unknown levels score 0 and a zero required score yields a 0% gap.

use serde::{Deserialize, Serialize};

use crate::catalog::{Priority, Requirement, RequirementCatalog};
use crate::inventory::{Skill, SkillInventory};
use crate::level::Level;
use crate::types::{RequirementId, SkillId};

/// How a requirement finds its skill in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Inventory skill name contains the requirement's skill name
    /// (case-insensitive). "React.js" does NOT match an inventory "React".
    Substring,
    /// Either name contains the other (case-insensitive).
    Bidirectional,
    /// Exact taxonomy id when both sides carry one, otherwise `Substring`.
    #[default]
    TaxonomyFirst,
}

impl MatchStrategy {
    /// Whether `skill` satisfies `requirement` under this strategy.
    pub fn matches(self, skill: &Skill, requirement: &Requirement) -> bool {
        let wanted = requirement.skill_name.to_lowercase();
        let have = skill.name.to_lowercase();

        match self {
            MatchStrategy::Substring => have.contains(&wanted),
            MatchStrategy::Bidirectional => have.contains(&wanted) || wanted.contains(&have),
            MatchStrategy::TaxonomyFirst => {
                match (&skill.taxonomy_id, &requirement.taxonomy_id) {
                    (Some(a), Some(b)) => a == b,
                    _ => have.contains(&wanted),
                }
            }
        }
    }

    /// First inventory skill matching `requirement`, in inventory order.
    pub fn find<'a>(self, inventory: &'a SkillInventory, requirement: &Requirement) -> Option<&'a Skill> {
        inventory.iter().find(|skill| self.matches(skill, requirement))
    }
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Inventory matching rule (default: TaxonomyFirst)
    pub match_strategy: MatchStrategy,
}

/// Derived comparison of a required and an actual proficiency.
///
/// Never stored; recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRecord {
    pub requirement_id: RequirementId,
    pub skill_name: String,
    pub department: String,
    pub required_level: Level,
    pub required_score: u32,
    pub current_level: Level,
    pub current_score: u32,
    /// `max(0, required_score - current_score)`
    pub gap: u32,
    /// `round(gap / required_score * 100)`, 0 when required_score is 0
    pub gap_percentage: u32,
    pub priority: Priority,
    pub affected_headcount: u32,
    pub recommended_training: String,
    pub present_in_inventory: bool,
    /// Inventory record the requirement matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_skill: Option<SkillId>,
}

/// Skills-gap engine.
///
/// ```
/// use skillgap_core::{GapEngine, RequirementCatalog, SkillInventory};
///
/// let engine = GapEngine::new();
/// let records = engine.evaluate(&SkillInventory::new(), &RequirementCatalog::new(), None);
/// assert!(records.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GapEngine {
    config: EngineConfig,
}

impl GapEngine {
    /// Create engine with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom engine configuration (builder pattern)
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the match strategy (builder pattern)
    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.config.match_strategy = strategy;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every requirement passing the department filter.
    ///
    /// Output order is catalog order. `None` or `Some("all")` disables the
    /// filter; any other value keeps only requirements of that exact
    /// department.
    pub fn evaluate(
        &self,
        inventory: &SkillInventory,
        catalog: &RequirementCatalog,
        department: Option<&str>,
    ) -> Vec<GapRecord> {
        let strategy = self.config.match_strategy;

        let records: Vec<GapRecord> = catalog
            .filter_department(department)
            .map(|requirement| {
                let matched = strategy.find(inventory, requirement);
                super::scoring::score_requirement(requirement, matched)
            })
            .collect();

        tracing::debug!(
            requirements = catalog.len(),
            department = department.unwrap_or(crate::catalog::ALL_DEPARTMENTS),
            strategy = ?strategy,
            records = records.len(),
            "Evaluated skills gap"
        );

        records
    }
}

/// Evaluate with the default engine configuration.
pub fn evaluate(
    inventory: &SkillInventory,
    catalog: &RequirementCatalog,
    department: Option<&str>,
) -> Vec<GapRecord> {
    GapEngine::new().evaluate(inventory, catalog, department)
}
