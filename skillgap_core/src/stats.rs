//! Dashboard headline statistics

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Priority;
use crate::certification::CertificationCollection;
use crate::gaps::GapRecord;
use crate::inventory::SkillInventory;
use crate::report;
use crate::training::{TrainingCollection, TrainingStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_skills: usize,
    pub verified_skills: usize,
    pub active_certifications: usize,
    pub completed_training: usize,
    pub in_progress_training: usize,
    pub planned_training: usize,
    pub total_training_hours: u64,
    pub critical_gaps: usize,
    pub average_gap: f64,
}

impl DashboardStats {
    /// Snapshot of the user's collections as of `today`.
    pub fn compute(
        skills: &SkillInventory,
        certifications: &CertificationCollection,
        training: &TrainingCollection,
        gaps: &[GapRecord],
        today: NaiveDate,
    ) -> Self {
        let summary = training.summary();
        Self {
            total_skills: skills.len(),
            verified_skills: skills.verified_count(),
            active_certifications: certifications.active_count(today),
            completed_training: summary.completed,
            in_progress_training: training.count_status(TrainingStatus::InProgress),
            planned_training: summary.planned,
            total_training_hours: summary.total_hours,
            critical_gaps: report::count_by_priority(gaps, Priority::Critical),
            average_gap: report::average_gap(gaps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::gaps::GapEngine;

    #[test]
    fn test_fixture_stats() {
        let skills = fixtures::skills();
        let gaps = GapEngine::new().evaluate(&skills, &fixtures::requirements(), None);
        let stats = DashboardStats::compute(
            &skills,
            &fixtures::certifications(),
            &fixtures::training(),
            &gaps,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );

        assert_eq!(stats.total_skills, 8);
        assert_eq!(stats.verified_skills, 4);
        assert_eq!(stats.active_certifications, 4);
        assert_eq!(stats.completed_training, 2);
        assert_eq!(stats.in_progress_training, 1);
        assert_eq!(stats.planned_training, 2);
        assert_eq!(stats.total_training_hours, 120);
        assert_eq!(stats.critical_gaps, 1);
    }

    #[test]
    fn test_empty_collections() {
        let stats = DashboardStats::compute(
            &SkillInventory::new(),
            &CertificationCollection::new(),
            &TrainingCollection::new(),
            &[],
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        assert_eq!(stats.total_skills, 0);
        assert_eq!(stats.average_gap, 0.0);
    }
}
