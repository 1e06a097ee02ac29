//! Strongly-typed ID wrappers for stored entities
//!
//! Newtype wrappers keep expense and goal IDs from being mixed up at compile
//! time. IDs display as a short prefixed form (`exp-1a2b3c4d`) and parse from
//! either that form or the full UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied identifier refers to this ID
            ///
            /// Accepts the full UUID, the short display form, or a bare
            /// UUID prefix of at least 8 characters.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                let bare = identifier.strip_prefix($display_prefix).unwrap_or(identifier);
                bare.len() >= 8 && self.0.to_string().starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(GoalId, "gol-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_short_form_matches() {
        let id = GoalId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("gol-1"));
        assert!(!GoalId::new().matches(&id.to_string()));
    }

    #[test]
    fn test_parse_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_serialization() {
        let id = GoalId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
