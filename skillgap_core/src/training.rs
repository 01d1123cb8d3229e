//! Training records
//!
//! Learning activities with a free-moving status: any status can follow any
//! other.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::{CoreError, Result};
use crate::types::{RequirementId, TrainingId};

/// Progress of a training record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl TrainingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingStatus::Planned => "planned",
            TrainingStatus::InProgress => "in-progress",
            TrainingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A learning activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub id: TrainingId,
    pub title: String,
    pub provider: String,
    #[serde(default)]
    pub status: TrainingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    /// Length in hours
    #[serde(rename = "duration")]
    pub duration_hours: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    /// Requirement a drafted plan was created for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<RequirementId>,
}

/// A training record before it has an identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
    pub title: String,
    pub provider: String,
    #[serde(default)]
    pub status: TrainingStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(rename = "duration")]
    pub duration_hours: u32,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
}

impl NewTraining {
    /// Attach an identifier.
    pub fn with_id(self, id: TrainingId) -> TrainingRecord {
        TrainingRecord {
            id,
            title: self.title,
            provider: self.provider,
            status: self.status,
            start_date: self.start_date,
            completion_date: self.completion_date,
            duration_hours: self.duration_hours,
            category: self.category,
            description: self.description,
            certificate_url: self.certificate_url,
            origin: None,
        }
    }
}

/// Partial update for a [`TrainingRecord`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPatch {
    pub title: Option<String>,
    pub provider: Option<String>,
    pub status: Option<TrainingStatus>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    #[serde(rename = "duration")]
    pub duration_hours: Option<u32>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
}

impl TrainingPatch {
    pub fn status(status: TrainingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for TrainingRecord {
    type Id = TrainingId;
    type Patch = TrainingPatch;

    fn id(&self) -> &TrainingId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("training title is empty".to_string()));
        }
        Ok(())
    }

    fn apply(&mut self, patch: &TrainingPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(provider) = &patch.provider {
            self.provider = provider.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.start_date {
            self.start_date = Some(date);
        }
        if let Some(date) = patch.completion_date {
            self.completion_date = Some(date);
        }
        if let Some(hours) = patch.duration_hours {
            self.duration_hours = hours;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(url) = &patch.certificate_url {
            self.certificate_url = Some(url.clone());
        }
    }
}

/// The user's training records.
pub type TrainingCollection = Collection<TrainingRecord>;

/// Rollup of a training collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    pub planned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total_hours: u64,
    pub completed_hours: u64,
    /// Completed records as a rounded percentage of all records
    pub completion_rate: u32,
}

impl Collection<TrainingRecord> {
    /// Record new training under a fresh identifier.
    pub fn add(&mut self, training: NewTraining) -> Result<TrainingId> {
        self.insert(training.with_id(TrainingId::new()))
    }

    pub fn count_status(&self, status: TrainingStatus) -> usize {
        self.iter().filter(|t| t.status == status).count()
    }

    /// First record drafted for `requirement`, if any.
    pub fn find_by_origin(&self, requirement: &RequirementId) -> Option<&TrainingRecord> {
        self.iter().find(|t| t.origin.as_ref() == Some(requirement))
    }

    pub fn summary(&self) -> TrainingSummary {
        let completed = self.count_status(TrainingStatus::Completed);
        let completion_rate = if self.is_empty() {
            0
        } else {
            (completed as f64 / self.len() as f64 * 100.0).round() as u32
        };

        TrainingSummary {
            planned: self.count_status(TrainingStatus::Planned),
            in_progress: self.count_status(TrainingStatus::InProgress),
            completed,
            total_hours: self.iter().map(|t| t.duration_hours as u64).sum(),
            completed_hours: self
                .iter()
                .filter(|t| t.status == TrainingStatus::Completed)
                .map(|t| t.duration_hours as u64)
                .sum(),
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(id: &str, status: TrainingStatus, hours: u32) -> TrainingRecord {
        NewTraining {
            title: format!("Course {}", id),
            provider: "Udemy".to_string(),
            status,
            duration_hours: hours,
            category: "API".to_string(),
            ..NewTraining::default()
        }
        .with_id(TrainingId::from(id))
    }

    #[test]
    fn test_status_transitions_unconstrained() {
        let mut collection = TrainingCollection::new();
        let id = collection.insert(training("1", TrainingStatus::Completed, 10)).unwrap();

        for status in [TrainingStatus::Planned, TrainingStatus::InProgress, TrainingStatus::Completed, TrainingStatus::Planned] {
            let updated = collection.update(&id, &TrainingPatch::status(status)).unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[test]
    fn test_summary() {
        let collection: TrainingCollection = vec![
            training("1", TrainingStatus::InProgress, 16),
            training("2", TrainingStatus::Planned, 40),
            training("3", TrainingStatus::Completed, 12),
            training("4", TrainingStatus::Completed, 20),
        ]
        .into_iter()
        .collect();

        let summary = collection.summary();
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total_hours, 88);
        assert_eq!(summary.completed_hours, 32);
        assert_eq!(summary.completion_rate, 50);
    }

    #[test]
    fn test_summary_empty() {
        let summary = TrainingCollection::new().summary();
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.total_hours, 0);
    }

    #[test]
    fn test_status_serde_labels() {
        assert_eq!(serde_json::to_string(&TrainingStatus::InProgress).unwrap(), "\"in-progress\"");

        let json = r#"{"id":"3","title":"Docker Fundamentals","provider":"Docker Inc.",
                       "status":"completed","startDate":"2024-08-01","completionDate":"2024-08-15",
                       "duration":12,"category":"DevOps"}"#;
        let record: TrainingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, TrainingStatus::Completed);
        assert_eq!(record.duration_hours, 12);
        assert!(record.origin.is_none());
    }
}
