//! Skillgap - skills-gap scoring engine
//!
//! Compares the proficiency levels an organization requires against the
//! levels recorded in a skill inventory, and reports the gaps.
//!
//! # Overview
//!
//! - **Level scale**: proficiency labels and their numeric scores
//! - **Skill inventory**: a user's or team's recorded skills
//! - **Requirement catalog**: required levels with priority and headcount
//! - **Gap engine**: one scored gap record per requirement
//! - **Reporting**: tier counts, averages, flat tables and CSV
//! - **Training bridge**: turns a gap into a planned training record
//!
//! # Quick Start
//!
//! ```rust
//! use skillgap_core::{fixtures, report::GapSummary, GapEngine};
//!
//! let engine = GapEngine::new();
//! let records = engine.evaluate(&fixtures::skills(), &fixtures::requirements(), Some("Engineering"));
//!
//! let summary = GapSummary::from_records(&records);
//! assert_eq!(summary.critical, 1);
//! ```
//!
//! Scoring, aggregation and export are infallible. Only collection
//! mutations return [`CoreError`].

pub mod error;
pub mod types;

pub mod level;
pub mod collection;
pub mod user;
pub mod inventory;
pub mod catalog;
pub mod gaps;
pub mod report;
pub mod export;

pub mod training;
pub mod bridge;
pub mod certification;
pub mod team;
pub mod stats;
pub mod fixtures;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{CertificationId, MemberId, RequirementId, SkillId, TrainingId};

pub use bridge::{create_plan_from_gap, draft_plan, upsert_plan_for_gap, PlanTemplate};
pub use catalog::{Priority, Requirement, RequirementCatalog};
pub use certification::{Certification, CertificationCollection, CertificationPatch};
pub use collection::{Collection, Record};
pub use gaps::{EngineConfig, GapEngine, GapRecord, MatchStrategy};
pub use inventory::{NewSkill, Skill, SkillInventory, SkillPatch};
pub use level::Level;
pub use stats::DashboardStats;
pub use team::{MemberStatus, TeamMember};
pub use training::{NewTraining, TrainingCollection, TrainingPatch, TrainingRecord, TrainingStatus};
pub use user::{User, UserRole};

/// Skillgap core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the skillgap core
pub fn init() {
    tracing::info!("Skillgap core v{}", VERSION);
}
