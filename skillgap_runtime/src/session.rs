//! Persisted sign-in state
//!
//! Two keys: the authentication flag (`"true"` or absent) and the JSON user
//! profile.

use std::sync::Arc;

use skillgap_core::{fixtures, User};

use crate::error::Result;
use crate::store::KeyValueStore;

pub const AUTH_KEY: &str = "aris-auth";
pub const USER_KEY: &str = "aris-user";

/// Reads and writes the session keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Mark `user` as signed in.
    pub fn save(&self, user: &User) -> Result<()> {
        let profile = serde_json::to_string(user)?;
        self.store.set(AUTH_KEY, "true")?;
        self.store.set(USER_KEY, &profile)?;
        Ok(())
    }

    /// Signed-in user recorded by a previous run.
    ///
    /// A set flag without a profile yields the seeded profile. A profile that
    /// does not decode is discarded together with the flag.
    pub fn restore(&self) -> Result<Option<User>> {
        if self.store.get(AUTH_KEY)?.as_deref() != Some("true") {
            return Ok(None);
        }

        let Some(profile) = self.store.get(USER_KEY)? else {
            return Ok(Some(fixtures::seeded_user()));
        };

        match serde_json::from_str::<User>(&profile) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!("Discarding stored profile: {}", e);
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Forget the signed-in user.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(AUTH_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }
}
