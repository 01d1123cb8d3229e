//! Team roster

use serde::{Deserialize, Serialize};

use crate::types::MemberId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    /// Currently enrolled in training
    Training,
}

/// One row of the team overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    /// Job title
    pub role: String,
    pub department: String,
    pub skills_count: u32,
    pub certifications_count: u32,
    #[serde(default)]
    pub active_training_count: u32,
    /// Legacy progress percentage shown next to the member
    #[serde(default)]
    pub skills_progress: u32,
    #[serde(default)]
    pub status: MemberStatus,
}

/// Members whose name, role or department contains `term`, case-insensitively.
///
/// An empty term returns every member.
pub fn search<'a>(members: &'a [TeamMember], term: &str) -> Vec<&'a TeamMember> {
    let term = term.to_lowercase();
    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&term)
                || m.role.to_lowercase().contains(&term)
                || m.department.to_lowercase().contains(&term)
        })
        .collect()
}
