//! User settings, one store key per section
//!
//! Sections are flat JSON objects. A missing or undecodable section loads as
//! its defaults.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::KeyValueStore;

/// A settings section stored under its own key.
pub trait SettingsSection: Serialize + DeserializeOwned + Default {
    const KEY: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub skill_updates: bool,
    pub training_reminders: bool,
    pub certification_alerts: bool,
    pub weekly_reports: bool,
    pub team_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            skill_updates: true,
            training_reminders: true,
            certification_alerts: true,
            weekly_reports: false,
            team_updates: true,
        }
    }
}

impl SettingsSection for NotificationSettings {
    const KEY: &'static str = "aris-settings-notifications";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub title: String,
    pub department: String,
    pub phone: String,
    pub timezone: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@company.com".to_string(),
            title: "HR Manager".to_string(),
            department: "Human Resources".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            timezone: "EST".to_string(),
        }
    }
}

impl SettingsSection for ProfileSettings {
    const KEY: &'static str = "aris-settings-profile";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub language: String,
    pub date_format: String,
    /// light, dark or system
    pub theme: String,
    pub data_retention: String,
    pub analytics: bool,
    pub auto_backup: bool,
    pub beta_features: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            date_format: "mm/dd/yyyy".to_string(),
            theme: "system".to_string(),
            data_retention: "1year".to_string(),
            analytics: true,
            auto_backup: true,
            beta_features: false,
        }
    }
}

impl SettingsSection for SystemSettings {
    const KEY: &'static str = "aris-settings-system";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub profile_visibility: bool,
    pub skills_visibility: bool,
    pub training_visibility: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor: false,
            profile_visibility: true,
            skills_visibility: true,
            training_visibility: false,
        }
    }
}

impl SettingsSection for SecuritySettings {
    const KEY: &'static str = "aris-settings-security";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntegrationSettings {
    pub slack: bool,
    pub google_workspace: bool,
    pub microsoft_teams: bool,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            slack: true,
            google_workspace: false,
            microsoft_teams: false,
        }
    }
}

impl SettingsSection for IntegrationSettings {
    const KEY: &'static str = "aris-settings-integrations";
}

/// Every section key, in display order.
pub const SETTINGS_KEYS: [&str; 5] = [
    NotificationSettings::KEY,
    ProfileSettings::KEY,
    SystemSettings::KEY,
    SecuritySettings::KEY,
    IntegrationSettings::KEY,
];

/// Settings persistence over a [`KeyValueStore`].
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn KeyValueStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored section, or its defaults.
    pub fn load<T: SettingsSection>(&self) -> Result<T> {
        let Some(text) = self.store.get(T::KEY)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&text) {
            Ok(section) => Ok(section),
            Err(e) => {
                tracing::warn!("Ignoring undecodable settings {}: {}", T::KEY, e);
                Ok(T::default())
            }
        }
    }

    /// Persist one section.
    pub fn save<T: SettingsSection>(&self, section: &T) -> Result<()> {
        let text = serde_json::to_string(section)?;
        self.store.set(T::KEY, &text)?;
        tracing::debug!("Saved settings {}", T::KEY);
        Ok(())
    }

    /// Drop every stored section so all of them load as defaults.
    pub fn reset(&self) -> Result<()> {
        for key in SETTINGS_KEYS {
            self.store.remove(key)?;
        }
        tracing::info!("Settings reset to defaults");
        Ok(())
    }
}
