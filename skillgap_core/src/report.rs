//! Aggregation and reporting over gap records
//!
//! Pure reductions: calling any of them twice on the same input yields the
//! same result, and none of them can fail.

use serde::Serialize;

use crate::catalog::Priority;
use crate::gaps::GapRecord;

/// Number of records in the given priority tier.
pub fn count_by_priority(records: &[GapRecord], tier: Priority) -> usize {
    records.iter().filter(|r| r.priority == tier).count()
}

/// Arithmetic mean of the gap percentages; 0 for an empty slice.
pub fn average_gap(records: &[GapRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: u64 = records.iter().map(|r| r.gap_percentage as u64).sum();
    total as f64 / records.len() as f64
}

/// Sum of affected headcounts.
///
/// An employee who appears under several gaps is counted once per gap; the
/// records carry no employee identities to deduplicate on.
pub fn total_affected(records: &[GapRecord]) -> u64 {
    records.iter().map(|r| r.affected_headcount as u64).sum()
}

/// One exportable row, every value already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRow {
    pub skill: String,
    pub priority: String,
    /// Percentage with a `%` suffix
    pub gap_percentage: String,
    pub affected_headcount: String,
    pub recommended_training: String,
}

impl GapRow {
    /// Column values in export order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.skill.as_str(),
            self.priority.as_str(),
            self.gap_percentage.as_str(),
            self.affected_headcount.as_str(),
            self.recommended_training.as_str(),
        ]
    }
}

impl From<&GapRecord> for GapRow {
    fn from(record: &GapRecord) -> Self {
        // Integer Display never inserts separators
        Self {
            skill: record.skill_name.clone(),
            priority: record.priority.to_string(),
            gap_percentage: format!("{}%", record.gap_percentage),
            affected_headcount: record.affected_headcount.to_string(),
            recommended_training: record.recommended_training.clone(),
        }
    }
}

/// Flat table of the records, in input order.
pub fn to_table(records: &[GapRecord]) -> Vec<GapRow> {
    records.iter().map(GapRow::from).collect()
}

/// Headline numbers for a set of gap records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSummary {
    pub records: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_gap: f64,
    pub total_affected: u64,
}

impl GapSummary {
    pub fn from_records(records: &[GapRecord]) -> Self {
        Self {
            records: records.len(),
            critical: count_by_priority(records, Priority::Critical),
            high: count_by_priority(records, Priority::High),
            medium: count_by_priority(records, Priority::Medium),
            low: count_by_priority(records, Priority::Low),
            average_gap: average_gap(records),
            total_affected: total_affected(records),
        }
    }
}
