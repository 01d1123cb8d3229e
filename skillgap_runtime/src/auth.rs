//! Authentication against a fixed allow-list
//!
//! Login and registration both wait out a configured latency before
//! answering. Passwords are compared in plain text.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use skillgap_core::fixtures;
use skillgap_core::{User, UserRole};

use crate::error::{Result, RuntimeError, ValidationError};
use crate::RuntimeConfig;

/// Accounts accepted by [`Authenticator::login`].
pub const ALLOWED_USERS: [(&str, &str); 8] = [
    ("admin@company.com", "admin123"),
    ("hr@company.com", "hr123"),
    ("manager@company.com", "manager123"),
    ("priya.sharma@company.com", "priya123"),
    ("rajesh.kumar@company.com", "rajesh123"),
    ("anita.singh@company.com", "anita123"),
    ("vivek.gupta@company.com", "vivek123"),
    ("sneha.reddy@company.com", "sneha123"),
];

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Display name for a signed-in email; first matching fragment wins.
pub fn display_name_for(email: &str) -> &'static str {
    const NAMES: [(&str, &str); 8] = [
        ("priya", "Priya Sharma"),
        ("rajesh", "Rajesh Kumar"),
        ("anita", "Anita Singh"),
        ("vivek", "Vivek Gupta"),
        ("sneha", "Sneha Reddy"),
        ("admin", "Admin User"),
        ("hr", "HR Manager"),
        ("manager", "Team Manager"),
    ];

    NAMES
        .iter()
        .find(|(fragment, _)| email.contains(fragment))
        .map(|(_, name)| *name)
        .unwrap_or("User")
}

pub fn is_registered(email: &str) -> bool {
    ALLOWED_USERS.iter().any(|(known, _)| *known == email)
}

/// Sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Check the form. Returns the first failing rule.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.first_name.is_empty() || self.last_name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if is_registered(&self.email) {
            return Err(ValidationError::EmailTaken);
        }
        Ok(())
    }

    /// Profile for a freshly registered account.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: now.timestamp_millis().to_string(),
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            role: UserRole::Employee,
            department: Some("General".to_string()),
            position: Some("Employee".to_string()),
            avatar: None,
            created_at: now,
        }
    }
}

/// Resolves login and registration attempts.
#[derive(Clone, Debug)]
pub struct Authenticator {
    config: RuntimeConfig,
}

impl Authenticator {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Check `email`/`password` against the allow-list.
    ///
    /// The returned profile is the seeded profile with the email and the
    /// derived display name swapped in.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        tokio::time::sleep(self.config.login_latency).await;

        let known = ALLOWED_USERS
            .iter()
            .any(|(e, p)| *e == email && *p == password);
        if !known {
            tracing::info!("Rejected login for {}", email);
            return Err(RuntimeError::InvalidCredentials);
        }

        let user = User {
            email: email.to_string(),
            name: display_name_for(email).to_string(),
            ..fixtures::seeded_user()
        };
        tracing::info!("Logged in {} ({})", user.email, user.name);
        Ok(user)
    }

    /// Validate the form and build the new profile.
    pub async fn register(&self, form: Registration) -> Result<User> {
        tokio::time::sleep(self.config.register_latency).await;

        form.validate()?;
        let user = form.into_user(Utc::now());
        tracing::info!("Registered {}", user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, last: &str, email: &str, password: &str) -> Registration {
        Registration {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name_for("priya.sharma@company.com"), "Priya Sharma");
        assert_eq!(display_name_for("admin@company.com"), "Admin User");
        assert_eq!(display_name_for("hr@company.com"), "HR Manager");
        assert_eq!(display_name_for("manager@company.com"), "Team Manager");
        assert_eq!(display_name_for("someone@else.org"), "User");
    }

    #[test]
    fn test_validation_order() {
        // Short password and bad email: the missing field wins
        assert_eq!(form("", "Doe", "bad", "1").validate(), Err(ValidationError::MissingFields));
        assert_eq!(form("Jane", "Doe", "bad", "1").validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(form("Jane", "Doe", "bad", "secret").validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            form("Jane", "Doe", "hr@company.com", "secret").validate(),
            Err(ValidationError::EmailTaken)
        );
        assert_eq!(form("Jane", "Doe", "jane@doe.io", "secret").validate(), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["a@b", "a b@c.d", "@c.d", "a@@c.d"] {
            assert!(!EMAIL_RE.is_match(bad), "{} should be rejected", bad);
        }
        assert!(EMAIL_RE.is_match("first.last@sub.example.com"));
    }

    #[test]
    fn test_new_user_profile() {
        let now = Utc::now();
        let user = form("Jane", "Doe", "jane@doe.io", "secret").into_user(now);
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.role, UserRole::Employee);
        assert_eq!(user.department.as_deref(), Some("General"));
        assert_eq!(user.position.as_deref(), Some("Employee"));
        assert_eq!(user.id, now.timestamp_millis().to_string());
    }

    #[tokio::test]
    async fn test_login() {
        let auth = Authenticator::new(RuntimeConfig::instant());

        let user = auth.login("rajesh.kumar@company.com", "rajesh123").await.unwrap();
        assert_eq!(user.name, "Rajesh Kumar");
        assert_eq!(user.email, "rajesh.kumar@company.com");
        assert_eq!(user.id, "1");

        let err = auth.login("rajesh.kumar@company.com", "wrong").await.unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidCredentials));
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_waits_for_latency() {
        let auth = Authenticator::new(RuntimeConfig::default());
        let start = tokio::time::Instant::now();

        let err = auth.register(form("", "", "", "")).await.unwrap_err();
        assert!(start.elapsed() >= std::time::Duration::from_millis(1500));
        assert_eq!(err.to_string(), "All fields are required");
    }
}
