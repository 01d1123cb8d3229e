//! Session facade
//!
//! Owns the key-value store, the authenticator and the [`AppState`], and
//! keeps the persisted sign-in keys in step with the state.

use std::sync::Arc;

use chrono::NaiveDate;
use skillgap_core::{DashboardStats, User};
use skillgap_runtime::{Authenticator, FileStore, KeyValueStore, MemoryStore, Registration, RuntimeConfig, SessionStore, Settings};

use crate::error::Result;
use crate::state::{reduce, Action, AppState};

pub struct Session {
    auth: Authenticator,
    sessions: SessionStore,
    settings: Settings,
    state: AppState,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>, config: RuntimeConfig) -> Self {
        Self {
            auth: Authenticator::new(config),
            sessions: SessionStore::new(store.clone()),
            settings: Settings::new(store),
            state: AppState::default(),
        }
    }

    /// Session over the file store in `config.data_dir`.
    pub fn open(config: RuntimeConfig) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::new(Arc::new(store), config))
    }

    /// Session that forgets everything on drop.
    pub fn in_memory(config: RuntimeConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.auth.login(email, password).await?;
        self.sessions.save(&user)?;
        self.dispatch(Action::Login { user: user.clone() });
        Ok(user)
    }

    pub async fn register(&mut self, form: Registration) -> Result<User> {
        let user = self.auth.register(form).await?;
        self.sessions.save(&user)?;
        self.dispatch(Action::Register { user: user.clone() });
        Ok(user)
    }

    /// Pick up the sign-in persisted by an earlier run.
    pub fn restore(&mut self) -> Result<Option<User>> {
        let restored = self.sessions.restore()?;
        if let Some(user) = &restored {
            tracing::info!("Restored session for {}", user.email);
            self.dispatch(Action::Restore { user: user.clone() });
        }
        Ok(restored)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.sessions.clear()?;
        if let Some(user) = &self.state.user {
            tracing::info!("Logged out {}", user.email);
        }
        self.dispatch(Action::Logout);
        Ok(())
    }

    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(
            &self.state.skills,
            &self.state.certifications,
            &self.state.training,
            &self.state.gaps,
            today,
        )
    }
}
