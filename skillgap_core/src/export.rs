//! CSV export
//!
//! Header row always present, one row per record, `\n` after every record.
//! A field is quoted only when it contains a comma, a double quote, CR or LF,
//! so comma-free data renders exactly as the plain comma-joined format.

use crate::gaps::{GapRecord, GapSuggestion, SuggestedAction};
use crate::report::GapRow;
use crate::team::TeamMember;

pub const GAP_CSV_HEADER: [&str; 5] = [
    "Skill",
    "Priority",
    "Gap Percentage",
    "Employees Affected",
    "Recommended Training",
];

pub const TEAM_CSV_HEADER: [&str; 6] = [
    "Name",
    "Role",
    "Department",
    "Skills Count",
    "Certifications Count",
    "Active Training Count",
];

pub const SUGGESTION_CSV_HEADER: [&str; 5] = ["Skill", "Priority", "Gap Percentage", "Action", "Rationale"];

/// Quote `field` if it needs it.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Accumulates CSV text in memory.
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    buf: String,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header<S: AsRef<str>>(header: &[S]) -> Self {
        let mut writer = Self::new();
        writer.write_record(header);
        writer
    }

    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.buf.push_str(&escape_field(field.as_ref()));
        }
        self.buf.push('\n');
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Skills-gap export.
pub fn gaps_to_csv(records: &[GapRecord]) -> String {
    let mut csv = CsvWriter::with_header(&GAP_CSV_HEADER);
    for record in records {
        let row = GapRow::from(record);
        csv.write_record(&row.fields());
    }
    csv.finish()
}

/// Recommended-actions export.
pub fn suggestions_to_csv(suggestions: &[GapSuggestion]) -> String {
    let mut csv = CsvWriter::with_header(&SUGGESTION_CSV_HEADER);
    for suggestion in suggestions {
        let action = match suggestion.action {
            SuggestedAction::Enroll { .. } => "enroll",
            SuggestedAction::Upskill { .. } => "upskill",
            SuggestedAction::Maintain => "maintain",
        };
        csv.write_record(&[
            suggestion.skill_name.clone(),
            suggestion.priority.as_str().to_string(),
            format!("{}%", suggestion.gap_percentage),
            action.to_string(),
            suggestion.rationale.clone(),
        ]);
    }
    csv.finish()
}

/// Team-overview export.
pub fn team_to_csv(members: &[&TeamMember]) -> String {
    let mut csv = CsvWriter::with_header(&TEAM_CSV_HEADER);
    for member in members {
        csv.write_record(&[
            member.name.clone(),
            member.role.clone(),
            member.department.clone(),
            member.skills_count.to_string(),
            member.certifications_count.to_string(),
            member.active_training_count.to_string(),
        ]);
    }
    csv.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Priority, Requirement};
    use crate::gaps::{generate_all_suggestions, score_requirement};
    use crate::level::Level;
    use crate::team::MemberStatus;
    use crate::types::{MemberId, RequirementId};

    fn gap(name: &str, training: &str) -> GapRecord {
        score_requirement(
            &Requirement {
                id: RequirementId::from(name),
                skill_name: name.to_string(),
                taxonomy_id: None,
                required_level: Level::Intermediate,
                current_level: Level::Beginner,
                department: "Engineering".to_string(),
                priority: Priority::Critical,
                affected_headcount: 12,
                recommended_training: training.to_string(),
            },
            None,
        )
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(
            gaps_to_csv(&[]),
            "Skill,Priority,Gap Percentage,Employees Affected,Recommended Training\n"
        );
    }

    #[test]
    fn test_gap_rows() {
        let csv = gaps_to_csv(&[gap("Machine Learning", "ML Fundamentals Course")]);
        assert_eq!(
            csv,
            "Skill,Priority,Gap Percentage,Employees Affected,Recommended Training\n\
             Machine Learning,critical,50%,12,ML Fundamentals Course\n"
        );
    }

    #[test]
    fn test_comma_in_field_is_quoted() {
        let csv = gaps_to_csv(&[gap("Go", "Concurrency, Channels")]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "Go,critical,50%,12,\"Concurrency, Channels\"");
    }

    #[test]
    fn test_suggestion_rows() {
        let suggestions = generate_all_suggestions(&[gap("Machine Learning", "ML Fundamentals Course")]);
        assert_eq!(
            suggestions_to_csv(&suggestions),
            "Skill,Priority,Gap Percentage,Action,Rationale\n\
             Machine Learning,critical,50%,enroll,Machine Learning is not in the inventory; \
             enroll in 'ML Fundamentals Course' to reach Intermediate\n"
        );
    }

    #[test]
    fn test_team_export() {
        let member = TeamMember {
            id: MemberId::from("1"),
            name: "John Smith".to_string(),
            role: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            skills_count: 15,
            certifications_count: 3,
            active_training_count: 1,
            skills_progress: 85,
            status: MemberStatus::Active,
        };
        let csv = team_to_csv(&[&member]);
        assert_eq!(
            csv,
            "Name,Role,Department,Skills Count,Certifications Count,Active Training Count\n\
             John Smith,Senior Developer,Engineering,15,3,1\n"
        );
    }
}
