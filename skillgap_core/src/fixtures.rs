//! Seed data loaded on sign-in
//!
//! The demo profile, its collections, the organization's requirement
//! catalog and the team roster.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::catalog::{Priority, Requirement, RequirementCatalog};
use crate::certification::{Certification, CertificationCollection};
use crate::inventory::{NewSkill, SkillInventory};
use crate::level::Level;
use crate::team::{MemberStatus, TeamMember};
use crate::training::{NewTraining, TrainingCollection, TrainingStatus};
use crate::types::{CertificationId, MemberId, RequirementId, SkillId, TrainingId};
use crate::user::{User, UserRole};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Profile used when a session is restored without a stored one.
pub fn seeded_user() -> User {
    User {
        id: "1".to_string(),
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@company.com".to_string(),
        role: UserRole::Employee,
        department: Some("Engineering".to_string()),
        position: Some("Senior Software Engineer".to_string()),
        avatar: Some("/placeholder.svg".to_string()),
        created_at: midnight(2023, 1, 15),
    }
}

pub fn skills() -> SkillInventory {
    let rows = [
        ("1", "React", "Frontend", Level::Expert, 4.0, day(2024, 11, 1), true),
        ("2", "TypeScript", "Programming Languages", Level::Expert, 3.0, day(2024, 10, 15), true),
        ("3", "Python", "Backend", Level::Intermediate, 2.0, day(2024, 9, 20), false),
        ("4", "AWS", "Cloud", Level::Beginner, 1.0, day(2024, 11, 10), false),
        ("5", "Node.js", "Backend", Level::Intermediate, 2.0, day(2024, 10, 1), true),
        ("6", "Docker", "DevOps", Level::Beginner, 1.0, day(2024, 8, 15), false),
        ("7", "MongoDB", "Database", Level::Intermediate, 2.0, day(2024, 9, 1), true),
        ("8", "GraphQL", "API", Level::Beginner, 1.0, day(2024, 8, 20), false),
    ];

    rows.into_iter()
        .map(|(id, name, category, level, years, assessed, verified)| {
            NewSkill {
                years_experience: Some(years),
                last_assessed: Some(assessed),
                verified,
                ..NewSkill::new(name, category, level)
            }
            .with_id(SkillId::from(id))
        })
        .collect()
}

pub fn certifications() -> CertificationCollection {
    let cert = |id: &str, name: &str, issuer: &str, issued, expires, credential: &str, url: &str| Certification {
        id: CertificationId::from(id),
        name: name.to_string(),
        issuer: issuer.to_string(),
        issue_date: issued,
        expiry_date: expires,
        credential_id: Some(credential.to_string()),
        url: Some(url.to_string()),
        verified: true,
    };

    vec![
        cert(
            "1",
            "AWS Certified Developer - Associate",
            "Amazon Web Services",
            day(2024, 3, 15),
            Some(day(2027, 3, 15)),
            "AWS-DVA-12345",
            "https://aws.amazon.com/verification",
        ),
        cert(
            "2",
            "React Developer Certification",
            "Meta",
            day(2023, 11, 20),
            Some(day(2025, 11, 20)),
            "META-REACT-67890",
            "https://developers.facebook.com/certification",
        ),
        cert(
            "3",
            "Professional Scrum Master I",
            "Scrum.org",
            day(2023, 6, 10),
            None,
            "PSM-I-54321",
            "https://scrum.org/certificates",
        ),
        cert(
            "4",
            "MongoDB Developer Certification",
            "MongoDB Inc.",
            day(2024, 1, 12),
            Some(day(2026, 1, 12)),
            "MONGO-DEV-98765",
            "https://university.mongodb.com/certification",
        ),
    ]
    .into_iter()
    .collect()
}

pub fn training() -> TrainingCollection {
    let course = |title: &str, provider: &str, status, start, hours, category: &str, description: &str| NewTraining {
        title: title.to_string(),
        provider: provider.to_string(),
        status,
        start_date: Some(start),
        duration_hours: hours,
        category: category.to_string(),
        description: Some(description.to_string()),
        ..NewTraining::default()
    };

    let mut docker = course(
        "Docker Fundamentals",
        "Docker Inc.",
        TrainingStatus::Completed,
        day(2024, 8, 1),
        12,
        "DevOps",
        "Learn containerization basics with Docker.",
    );
    docker.completion_date = Some(day(2024, 8, 15));
    docker.certificate_url = Some("/certificates/docker-fundamentals.pdf".to_string());

    let mut graphql = course(
        "GraphQL Complete Guide",
        "Udemy",
        TrainingStatus::Completed,
        day(2024, 7, 15),
        20,
        "API",
        "Master GraphQL from basics to advanced concepts.",
    );
    graphql.completion_date = Some(day(2024, 8, 10));
    graphql.certificate_url = Some("/certificates/graphql-complete.pdf".to_string());

    let records = [
        course(
            "Advanced React Patterns",
            "Frontend Masters",
            TrainingStatus::InProgress,
            day(2024, 11, 1),
            16,
            "Frontend",
            "Deep dive into advanced React patterns including render props, compound components, and custom hooks.",
        ),
        course(
            "AWS Solutions Architect Professional",
            "A Cloud Guru",
            TrainingStatus::Planned,
            day(2025, 1, 10),
            40,
            "Cloud",
            "Comprehensive course for AWS Solutions Architect Professional certification.",
        ),
        docker,
        graphql,
        course(
            "Machine Learning Fundamentals",
            "Coursera",
            TrainingStatus::Planned,
            day(2025, 2, 1),
            32,
            "Data Science",
            "Introduction to machine learning concepts and practical applications.",
        ),
    ];

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.with_id(TrainingId::from((i + 1).to_string())))
        .collect()
}

/// The organization's requirement catalog.
pub fn requirements() -> RequirementCatalog {
    let rows = [
        ("React.js", Level::Expert, Level::Intermediate, "Engineering", Priority::High, 8, "Advanced React Patterns"),
        ("Machine Learning", Level::Intermediate, Level::Beginner, "Engineering", Priority::Critical, 12, "ML Fundamentals Course"),
        ("Cloud Architecture", Level::Expert, Level::Intermediate, "Engineering", Priority::High, 6, "AWS Solutions Architect"),
        ("Data Analysis", Level::Intermediate, Level::Intermediate, "Product", Priority::Low, 3, "Advanced Analytics"),
        ("DevOps", Level::Intermediate, Level::Beginner, "Engineering", Priority::Medium, 10, "DevOps Certification"),
        ("User Research", Level::Advanced, Level::Intermediate, "Design", Priority::Medium, 4, "UX Research Methods"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (skill, required, current, department, priority, headcount, training))| Requirement {
            id: RequirementId::from(format!("req-{}", i + 1)),
            skill_name: skill.to_string(),
            taxonomy_id: None,
            required_level: required,
            current_level: current,
            department: department.to_string(),
            priority,
            affected_headcount: headcount,
            recommended_training: training.to_string(),
        })
        .collect()
}

pub fn team_members() -> Vec<TeamMember> {
    let rows = [
        ("1", "John Smith", "Senior Developer", "Engineering", 15, 3, 0, 85, MemberStatus::Active),
        ("2", "Emily Davis", "UX Designer", "Design", 12, 2, 0, 78, MemberStatus::Active),
        ("3", "Michael Johnson", "Data Analyst", "Analytics", 18, 5, 1, 92, MemberStatus::Training),
        ("4", "Sarah Wilson", "Product Manager", "Product", 10, 1, 0, 65, MemberStatus::Active),
    ];

    rows.into_iter()
        .map(|(id, name, role, department, skills, certs, active, progress, status)| TeamMember {
            id: MemberId::from(id),
            name: name.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            skills_count: skills,
            certifications_count: certs,
            active_training_count: active,
            skills_progress: progress,
            status,
        })
        .collect()
}
