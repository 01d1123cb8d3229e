//! Application state and reducers
//!
//! Every mutation is an [`Action`] applied by [`reduce`]. Reducers never read
//! a clock or generate identifiers: both arrive in the action payload.

use chrono::NaiveDate;
use skillgap_core::{
    bridge, fixtures, CertificationCollection, CertificationId, CertificationPatch, Certification, EngineConfig,
    GapEngine, GapRecord, NewSkill, NewTraining, PlanTemplate, RequirementCatalog, RequirementId, SkillId,
    SkillInventory, SkillPatch, TrainingCollection, TrainingId, TrainingPatch, User,
};

use crate::error::{AppError, Result};

/// Everything the dashboard shows for one signed-in user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub skills: SkillInventory,
    pub certifications: CertificationCollection,
    pub training: TrainingCollection,
    pub requirements: RequirementCatalog,
    /// Result of the last gap refresh
    pub gaps: Vec<GapRecord>,
    pub engine: EngineConfig,
    pub plan_template: PlanTemplate,
}

/// State transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Signed in with a known account: seed the demo collections
    Login { user: User },
    /// New account: start with empty collections
    Register { user: User },
    /// Session restored at startup
    Restore { user: User },
    Logout,

    AddSkill { id: SkillId, skill: NewSkill },
    UpdateSkill { id: SkillId, patch: SkillPatch },
    DeleteSkill { id: SkillId },

    AddCertification { certification: Certification },
    UpdateCertification { id: CertificationId, patch: CertificationPatch },
    DeleteCertification { id: CertificationId },

    AddTraining { id: TrainingId, training: NewTraining },
    UpdateTraining { id: TrainingId, patch: TrainingPatch },
    DeleteTraining { id: TrainingId },

    SetRequirements { catalog: RequirementCatalog },
    SetEngine { engine: EngineConfig },
    /// Recompute gaps; `None` or `"all"` covers every department
    RefreshGaps { department: Option<String> },

    /// Append a planned training record for the gap of `requirement`
    CreatePlanFromGap { requirement: RequirementId, id: TrainingId, today: NaiveDate },
    /// Like `CreatePlanFromGap`, but at most one plan per requirement
    UpsertPlanForGap { requirement: RequirementId, id: TrainingId, today: NaiveDate },
}

fn seeded(user: User, engine: EngineConfig, plan_template: PlanTemplate) -> AppState {
    let skills = fixtures::skills();
    let requirements = fixtures::requirements();
    let gaps = GapEngine::new()
        .with_config(engine.clone())
        .evaluate(&skills, &requirements, None);

    AppState {
        user: Some(user),
        authenticated: true,
        skills,
        certifications: fixtures::certifications(),
        training: fixtures::training(),
        requirements,
        gaps,
        engine,
        plan_template,
    }
}

fn gap_for<'a>(state: &'a AppState, requirement: &RequirementId) -> Result<&'a GapRecord> {
    state
        .gaps
        .iter()
        .find(|g| &g.requirement_id == requirement)
        .ok_or_else(|| AppError::UnknownGap(requirement.to_string()))
}

/// Apply `action` to a copy of `state`.
pub fn try_reduce(state: &AppState, action: Action) -> Result<AppState> {
    let mut next = state.clone();

    match action {
        Action::Login { user } | Action::Restore { user } => {
            next = seeded(user, next.engine, next.plan_template);
        }
        Action::Register { user } => {
            next = AppState {
                user: Some(user),
                authenticated: true,
                engine: next.engine,
                plan_template: next.plan_template,
                ..AppState::default()
            };
        }
        Action::Logout => {
            next = AppState {
                engine: next.engine,
                plan_template: next.plan_template,
                ..AppState::default()
            };
        }

        Action::AddSkill { id, skill } => {
            next.skills.insert(skill.with_id(id))?;
        }
        Action::UpdateSkill { id, patch } => {
            next.skills.update(&id, &patch)?;
        }
        Action::DeleteSkill { id } => {
            next.skills.remove(&id);
        }

        Action::AddCertification { certification } => {
            next.certifications.insert(certification)?;
        }
        Action::UpdateCertification { id, patch } => {
            next.certifications.update(&id, &patch)?;
        }
        Action::DeleteCertification { id } => {
            next.certifications.remove(&id);
        }

        Action::AddTraining { id, training } => {
            next.training.insert(training.with_id(id))?;
        }
        Action::UpdateTraining { id, patch } => {
            next.training.update(&id, &patch)?;
        }
        Action::DeleteTraining { id } => {
            next.training.remove(&id);
        }

        Action::SetRequirements { catalog } => {
            next.requirements = catalog;
        }
        Action::SetEngine { engine } => {
            next.engine = engine;
        }
        Action::RefreshGaps { department } => {
            next.gaps = GapEngine::new()
                .with_config(next.engine.clone())
                .evaluate(&next.skills, &next.requirements, department.as_deref());
        }

        Action::CreatePlanFromGap { requirement, id, today } => {
            let gap = gap_for(state, &requirement)?;
            bridge::create_plan_from_gap(&mut next.training, gap, id, today, &state.plan_template)?;
        }
        Action::UpsertPlanForGap { requirement, id, today } => {
            let gap = gap_for(state, &requirement)?;
            bridge::upsert_plan_for_gap(&mut next.training, gap, id, today, &state.plan_template)?;
        }
    }

    Ok(next)
}

/// Apply `action`; an action that cannot apply leaves the state unchanged.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match try_reduce(&state, action) {
        Ok(next) => next,
        Err(e) => {
            tracing::warn!("Action rejected: {}", e);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_core::{Level, Priority, TrainingStatus};

    fn signed_in() -> AppState {
        reduce(
            AppState::default(),
            Action::Login {
                user: fixtures::seeded_user(),
            },
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_login_seeds_collections() {
        let state = signed_in();
        assert!(state.authenticated);
        assert_eq!(state.skills.len(), 8);
        assert_eq!(state.certifications.len(), 4);
        assert_eq!(state.training.len(), 5);
        assert_eq!(state.gaps.len(), state.requirements.len());
    }

    #[test]
    fn test_register_starts_empty() {
        let state = reduce(
            signed_in(),
            Action::Register {
                user: fixtures::seeded_user(),
            },
        );
        assert!(state.authenticated);
        assert!(state.skills.is_empty());
        assert!(state.training.is_empty());
        assert!(state.gaps.is_empty());
    }

    #[test]
    fn test_logout_clears_everything() {
        let state = reduce(signed_in(), Action::Logout);
        assert_eq!(state.user, None);
        assert!(!state.authenticated);
        assert!(state.skills.is_empty());
        assert!(state.requirements.is_empty());
    }

    #[test]
    fn test_reduce_is_pure() {
        let before = signed_in();
        let action = Action::AddSkill {
            id: SkillId::from("new"),
            skill: NewSkill::new("Rust", "Systems", Level::Beginner),
        };

        let a = reduce(before.clone(), action.clone());
        let b = reduce(before.clone(), action);
        assert_eq!(a, b);
        assert_eq!(before.skills.len(), 8);
        assert_eq!(a.skills.len(), 9);
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let before = signed_in();
        let after = reduce(
            before.clone(),
            Action::UpdateSkill {
                id: SkillId::from("missing"),
                patch: SkillPatch::default(),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_refresh_gaps_after_skill_change() {
        let state = signed_in();
        let state = reduce(
            state,
            Action::AddSkill {
                id: SkillId::from("ml"),
                skill: NewSkill::new("Machine Learning", "Data Science", Level::Intermediate),
            },
        );
        let state = reduce(state, Action::RefreshGaps { department: None });

        let ml = state.gaps.iter().find(|g| g.skill_name == "Machine Learning").unwrap();
        assert!(ml.present_in_inventory);
        assert_eq!(ml.gap, 0);
        assert_eq!(ml.priority, Priority::Critical);

        let design = reduce(
            state,
            Action::RefreshGaps {
                department: Some("Design".to_string()),
            },
        );
        assert_eq!(design.gaps.len(), 1);
    }

    #[test]
    fn test_plan_actions() {
        let state = signed_in();
        let requirement = state.gaps[1].requirement_id.clone();

        let mut next = state.clone();
        for id in ["p1", "p2"] {
            next = reduce(
                next,
                Action::CreatePlanFromGap {
                    requirement: requirement.clone(),
                    id: TrainingId::from(id),
                    today: today(),
                },
            );
        }
        assert_eq!(next.training.len(), state.training.len() + 2);

        let mut upserted = state.clone();
        for id in ["u1", "u2"] {
            upserted = reduce(
                upserted,
                Action::UpsertPlanForGap {
                    requirement: requirement.clone(),
                    id: TrainingId::from(id),
                    today: today(),
                },
            );
        }
        assert_eq!(upserted.training.len(), state.training.len() + 1);
        let plan = upserted.training.get(&TrainingId::from("u1")).unwrap();
        assert_eq!(plan.status, TrainingStatus::Planned);
    }

    #[test]
    fn test_plan_for_unknown_gap_rejected() {
        let state = signed_in();
        let err = try_reduce(
            &state,
            Action::CreatePlanFromGap {
                requirement: RequirementId::from("nope"),
                id: TrainingId::new(),
                today: today(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::UnknownGap(_)));
    }
}
