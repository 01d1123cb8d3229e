//! Requirement catalog
//!
//! Organizational skill needs, each owned by a department and tagged with a
//! priority tier. The catalog is an ordered sequence; gap records come out
//! in catalog order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::types::RequirementId;

/// Department filter value meaning "every department".
pub const ALL_DEPARTMENTS: &str = "all";

/// Priority tier of a requirement.
///
/// Ordering puts `Critical` first so an ascending sort lists the most
/// urgent tiers at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// All tiers, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An organizational skill requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: RequirementId,
    pub skill_name: String,
    /// Shared skill-taxonomy identifier, when the catalog carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_id: Option<String>,
    pub required_level: Level,
    /// Level assumed when the inventory has no matching skill
    #[serde(default)]
    pub current_level: Level,
    pub department: String,
    pub priority: Priority,
    #[serde(default)]
    pub affected_headcount: u32,
    #[serde(default)]
    pub recommended_training: String,
}

/// True when `department` passes `filter`.
///
/// `None` and the `"all"` sentinel pass everything; any other value must
/// match exactly.
pub fn department_matches(filter: Option<&str>, department: &str) -> bool {
    match filter {
        None => true,
        Some(ALL_DEPARTMENTS) => true,
        Some(wanted) => wanted == department,
    }
}

/// Ordered set of requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementCatalog {
    requirements: Vec<Requirement>,
}

impl RequirementCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn get(&self, id: &RequirementId) -> Option<&Requirement> {
        self.requirements.iter().find(|r| &r.id == id)
    }

    /// Requirements passing the department filter, in catalog order.
    pub fn filter_department<'a>(
        &'a self,
        filter: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Requirement> + 'a {
        self.requirements
            .iter()
            .filter(move |r| department_matches(filter, &r.department))
    }

    /// Distinct departments in first-seen order.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for requirement in &self.requirements {
            if !seen.contains(&requirement.department.as_str()) {
                seen.push(&requirement.department);
            }
        }
        seen
    }
}

impl From<Vec<Requirement>> for RequirementCatalog {
    fn from(requirements: Vec<Requirement>) -> Self {
        Self { requirements }
    }
}

impl FromIterator<Requirement> for RequirementCatalog {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        Self {
            requirements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(id: &str, skill: &str, department: &str) -> Requirement {
        Requirement {
            id: RequirementId::from(id),
            skill_name: skill.to_string(),
            taxonomy_id: None,
            required_level: Level::Intermediate,
            current_level: Level::Unknown,
            department: department.to_string(),
            priority: Priority::Medium,
            affected_headcount: 1,
            recommended_training: String::new(),
        }
    }

    #[test]
    fn test_priority_orders_critical_first() {
        let mut tiers = vec![Priority::Low, Priority::Critical, Priority::Medium, Priority::High];
        tiers.sort();
        assert_eq!(tiers, Priority::ALL.to_vec());
    }

    #[test]
    fn test_department_filter_sentinel() {
        assert!(department_matches(None, "Design"));
        assert!(department_matches(Some("all"), "Design"));
        assert!(department_matches(Some("Design"), "Design"));
        assert!(!department_matches(Some("design"), "Design"));
    }

    #[test]
    fn test_departments_first_seen() {
        let catalog: RequirementCatalog = vec![
            requirement("1", "Rust", "Engineering"),
            requirement("2", "Figma", "Design"),
            requirement("3", "Go", "Engineering"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.departments(), vec!["Engineering", "Design"]);
    }

    #[test]
    fn test_requirement_defaults_when_fields_missing() {
        let json = r#"{"id":"r1","skillName":"Kubernetes","requiredLevel":"intermediate",
                       "department":"Engineering","priority":"critical"}"#;
        let requirement: Requirement = serde_json::from_str(json).unwrap();

        assert_eq!(requirement.current_level, Level::Unknown);
        assert_eq!(requirement.affected_headcount, 0);
        assert_eq!(requirement.priority, Priority::Critical);
    }
}
