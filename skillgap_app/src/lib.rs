//! Skillgap application layer
//!
//! - [`state`]: the application state and its pure reducers
//! - [`session`]: session facade over storage, authentication and state
//! - [`input`]: JSON/YAML inventory and catalog files
//! - [`cli`]: the `skillgap` command line

pub mod cli;
pub mod error;
pub mod input;
pub mod session;
pub mod state;

pub use error::{AppError, Result};
pub use session::Session;
pub use state::{reduce, try_reduce, Action, AppState};

/// Skillgap application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize every skillgap layer
pub fn init() {
    skillgap_core::init();
    skillgap_runtime::init();
    tracing::info!("Skillgap app v{}", VERSION);
}
