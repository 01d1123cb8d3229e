//! Skillgap runtime layer - sessions, authentication and settings.
//!
//! This crate provides the services around the scoring engine:
//!
//! - Key-value session storage (in memory or a JSON file)
//! - Login against a fixed allow-list and registration validation
//! - Session persistence and restore
//! - Settings persistence, one key per section

use std::path::PathBuf;
use std::time::Duration;

pub mod auth;
pub mod error;
pub mod session;
pub mod settings;
pub mod store;

pub use auth::{Authenticator, Registration};
pub use error::{Result, RuntimeError, StorageError, ValidationError};
pub use session::SessionStore;
pub use settings::Settings;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Skillgap runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the skillgap runtime
pub fn init() {
    tracing::info!("Skillgap runtime v{}", VERSION);
}

/// Runtime configuration for storage and simulated latency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding the file-backed store
    pub data_dir: PathBuf,
    /// Pause before a login attempt resolves
    pub login_latency: Duration,
    /// Pause before a registration resolves
    pub register_latency: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".skillgap"),
            login_latency: Duration::from_millis(1000),
            register_latency: Duration::from_millis(1500),
        }
    }
}

impl RuntimeConfig {
    /// Default configuration without simulated latency.
    pub fn instant() -> Self {
        Self {
            login_latency: Duration::ZERO,
            register_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_login_latency(mut self, latency: Duration) -> Self {
        self.login_latency = latency;
        self
    }

    pub fn with_register_latency(mut self, latency: Duration) -> Self {
        self.register_latency = latency;
        self
    }
}
