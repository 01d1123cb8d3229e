//! Gap arithmetic and severity ordering
//!
//! Computes the numeric gap for one requirement:
//! - required score from the requirement's level
//! - current score from the matched skill, or the requirement's fallback level
//! - gap floored at zero, percentage rounded and guarded against a zero divisor

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::catalog::Requirement;
use crate::inventory::Skill;

use super::GapRecord;

/// `max(0, required - current)`
pub fn compute_gap(required_score: u32, current_score: u32) -> u32 {
    required_score.saturating_sub(current_score)
}

/// Gap as a rounded percentage of the required score, in [0, 100].
///
/// Returns 0 when `required_score` is 0.
pub fn gap_percentage(gap: u32, required_score: u32) -> u32 {
    if required_score == 0 {
        return 0;
    }
    let pct = (gap as f64 / required_score as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Build the gap record for one requirement.
///
/// `matched` is the inventory skill found for it, if any.
pub fn score_requirement(requirement: &Requirement, matched: Option<&Skill>) -> GapRecord {
    let current_level = matched
        .map(|skill| skill.level)
        .unwrap_or(requirement.current_level);

    let required_score = requirement.required_level.score();
    let current_score = current_level.score();
    let gap = compute_gap(required_score, current_score);

    GapRecord {
        requirement_id: requirement.id.clone(),
        skill_name: requirement.skill_name.clone(),
        department: requirement.department.clone(),
        required_level: requirement.required_level,
        required_score,
        current_level,
        current_score,
        gap,
        gap_percentage: gap_percentage(gap, required_score),
        priority: requirement.priority,
        affected_headcount: requirement.affected_headcount,
        recommended_training: requirement.recommended_training.clone(),
        present_in_inventory: matched.is_some(),
        matched_skill: matched.map(|skill| skill.id.clone()),
    }
}

/// Severity ordering wrapper.
///
/// BinaryHeap is max-heap, so "greater" means "more severe": a more urgent
/// priority tier first, then a larger gap percentage, then earlier catalog
/// position.
#[derive(Clone, Debug)]
struct BySeverity {
    position: usize,
    record: GapRecord,
}

impl PartialEq for BySeverity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BySeverity {}

impl PartialOrd for BySeverity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BySeverity {
    fn cmp(&self, other: &Self) -> Ordering {
        // Priority derives Critical < Low, so reverse it
        other
            .record
            .priority
            .cmp(&self.record.priority)
            .then(self.record.gap_percentage.cmp(&other.record.gap_percentage))
            .then(other.position.cmp(&self.position))
    }
}

/// Priority queue of gap records, most severe first.
pub struct GapQueue {
    inner: BinaryHeap<BySeverity>,
    pushed: usize,
}

impl GapQueue {
    /// Create empty queue
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Push a record. Push order breaks severity ties.
    pub fn push(&mut self, record: GapRecord) {
        self.inner.push(BySeverity {
            position: self.pushed,
            record,
        });
        self.pushed += 1;
    }

    /// Pop the most severe record
    pub fn pop(&mut self) -> Option<GapRecord> {
        self.inner.pop().map(|entry| entry.record)
    }

    /// Peek at the most severe record without removing it
    pub fn peek(&self) -> Option<&GapRecord> {
        self.inner.peek().map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drain into a vector, most severe first.
    pub fn into_sorted(mut self) -> Vec<GapRecord> {
        let mut out = Vec::with_capacity(self.inner.len());
        while let Some(record) = self.pop() {
            out.push(record);
        }
        out
    }
}

impl Default for GapQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<GapRecord> for GapQueue {
    fn from_iter<I: IntoIterator<Item = GapRecord>>(iter: I) -> Self {
        let mut queue = GapQueue::new();
        for record in iter {
            queue.push(record);
        }
        queue
    }
}

/// Copy of `records` ordered most severe first; ties keep input order.
pub fn by_severity(records: &[GapRecord]) -> Vec<GapRecord> {
    records.iter().cloned().collect::<GapQueue>().into_sorted()
}
