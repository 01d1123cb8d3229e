//! Identifier types shared across the core.
//!
//! Identifiers are opaque strings. Fixture data uses short ids such as `"1"` or
//! `"skill-1"`; freshly created records get a UUID v4.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new random identifier (UUID v4).
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a skill record in an inventory.
    SkillId
);

string_id!(
    /// Identifier of an organizational requirement.
    RequirementId
);

string_id!(
    /// Identifier of a training record.
    TrainingId
);

string_id!(
    /// Identifier of a certification.
    CertificationId
);

string_id!(
    /// Identifier of a team member.
    MemberId
);
