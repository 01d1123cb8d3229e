//! End-to-end gap scoring over small inventories and catalogs.

use chrono::NaiveDate;
use skillgap_core::export::gaps_to_csv;
use skillgap_core::gaps::by_severity;
use skillgap_core::report::{self, GapSummary};
use skillgap_core::{
    create_plan_from_gap, fixtures, GapEngine, Level, MatchStrategy, NewSkill, Priority, Requirement,
    RequirementCatalog, RequirementId, SkillId, SkillInventory, TrainingCollection, TrainingId,
    TrainingStatus, PlanTemplate,
};

fn requirement(id: &str, skill: &str, required: Level, fallback: Level, department: &str, priority: Priority) -> Requirement {
    Requirement {
        id: RequirementId::from(id),
        skill_name: skill.to_string(),
        taxonomy_id: None,
        required_level: required,
        current_level: fallback,
        department: department.to_string(),
        priority,
        affected_headcount: 5,
        recommended_training: format!("{} course", skill),
    }
}

fn inventory(skills: &[(&str, Level)]) -> SkillInventory {
    skills
        .iter()
        .enumerate()
        .map(|(i, (name, level))| NewSkill::new(*name, "General", *level).with_id(SkillId::from(i.to_string())))
        .collect()
}

#[test]
fn test_react_vs_react_js_substring_direction() {
    // Inventory "React" does not contain "react.js", so the fallback applies
    let inv = inventory(&[("React", Level::Intermediate)]);
    let catalog: RequirementCatalog = vec![requirement(
        "r1",
        "React.js",
        Level::Expert,
        Level::Intermediate,
        "Engineering",
        Priority::High,
    )]
    .into();

    let records = GapEngine::new().with_match_strategy(MatchStrategy::Substring).evaluate(&inv, &catalog, None);
    let r = &records[0];
    assert!(!r.present_in_inventory);
    assert_eq!(r.current_score, 50);
    assert_eq!(r.required_score, 100);
    assert_eq!(r.gap, 50);
    assert_eq!(r.gap_percentage, 50);

    // Either-direction containment finds the inventory skill
    let records = GapEngine::new()
        .with_match_strategy(MatchStrategy::Bidirectional)
        .evaluate(&inv, &catalog, None);
    let r = &records[0];
    assert!(r.present_in_inventory);
    assert_eq!(r.matched_skill, Some(SkillId::from("0")));
    assert_eq!(r.gap_percentage, 50);
}

#[test]
fn test_missing_skill_uses_fallback_level() {
    let catalog: RequirementCatalog = vec![requirement(
        "ml",
        "Machine Learning",
        Level::Intermediate,
        Level::Beginner,
        "Engineering",
        Priority::Critical,
    )]
    .into();

    let records = GapEngine::new().evaluate(&SkillInventory::new(), &catalog, None);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].gap, 25);
    assert_eq!(records[0].gap_percentage, 50);
    assert_eq!(records[0].priority, Priority::Critical);
}

#[test]
fn test_plan_creation_twice_adds_two_records() {
    let records = GapEngine::new().evaluate(&fixtures::skills(), &fixtures::requirements(), None);
    let gap = &records[1];
    let mut training = TrainingCollection::new();
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let before = training.len();
    for _ in 0..2 {
        create_plan_from_gap(&mut training, gap, TrainingId::new(), today, &PlanTemplate::default()).unwrap();
    }
    assert_eq!(training.len(), before + 2);
    for plan in training.iter() {
        assert_eq!(plan.status, TrainingStatus::Planned);
        assert_eq!(plan.duration_hours, 20);
    }
}

#[test]
fn test_department_filter_keeps_relative_order() {
    let catalog: RequirementCatalog = vec![
        requirement("1", "Figma", Level::Advanced, Level::Beginner, "Design", Priority::Low),
        requirement("2", "Rust", Level::Expert, Level::Beginner, "Engineering", Priority::High),
        requirement("3", "Roadmapping", Level::Intermediate, Level::Beginner, "Product", Priority::Medium),
        requirement("4", "Prototyping", Level::Expert, Level::Advanced, "Design", Priority::Critical),
    ]
    .into();
    let engine = GapEngine::new();

    let design: Vec<_> = engine
        .evaluate(&SkillInventory::new(), &catalog, Some("Design"))
        .into_iter()
        .map(|r| r.skill_name)
        .collect();
    assert_eq!(design, vec!["Figma", "Prototyping"]);

    // Exact match only
    assert!(engine.evaluate(&SkillInventory::new(), &catalog, Some("design")).is_empty());
    assert_eq!(engine.evaluate(&SkillInventory::new(), &catalog, Some("all")).len(), 4);
}

#[test]
fn test_evaluation_is_deterministic() {
    let skills = fixtures::skills();
    let catalog = fixtures::requirements();
    let engine = GapEngine::new();

    let first = engine.evaluate(&skills, &catalog, None);
    let second = engine.evaluate(&skills, &catalog, None);
    assert_eq!(first, second);
    assert_eq!(first.len(), catalog.len());
    assert!(first.iter().all(|r| r.gap_percentage <= 100));
}

#[test]
fn test_fixture_report() {
    let records = GapEngine::new().evaluate(&fixtures::skills(), &fixtures::requirements(), None);
    let summary = GapSummary::from_records(&records);

    assert_eq!(summary.records, 6);
    assert_eq!(summary.critical, 1);
    assert_eq!(summary.high, 2);
    assert_eq!(summary.medium, 2);
    assert_eq!(summary.low, 1);
    assert_eq!(summary.total_affected, report::total_affected(&records));

    let sorted = by_severity(&records);
    assert_eq!(sorted[0].skill_name, "Machine Learning");
    assert_eq!(sorted.last().map(|r| r.skill_name.as_str()), Some("Data Analysis"));

    let csv = gaps_to_csv(&records);
    assert_eq!(csv.lines().count(), records.len() + 1);
    assert!(csv.ends_with('\n'));
}
