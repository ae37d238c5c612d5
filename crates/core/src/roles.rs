//! User roles.
//!
//! Stored as lowercase snake_case text in `users.role`; the CHECK constraint
//! in `20250101000001_create_users.sql` must list the same values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three roles of the reporting workflow.
///
/// `DeliveryDirector` is the field role that files weekly reports for its
/// assigned projects. `Admin` and `PracticeHead` see everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    PracticeHead,
    DeliveryDirector,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::PracticeHead, Role::DeliveryDirector];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PracticeHead => "practice_head",
            Role::DeliveryDirector => "delivery_director",
        }
    }

    /// Admin and PracticeHead have system-wide read visibility.
    pub fn sees_everything(self) -> bool {
        matches!(self, Role::Admin | Role::PracticeHead)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid role '{s}'. Must be one of: admin, practice_head, delivery_director"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_round_trip_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = "pdm".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("Invalid role 'pdm'"));
    }

    #[test]
    fn test_only_leadership_sees_everything() {
        assert!(Role::Admin.sees_everything());
        assert!(Role::PracticeHead.sees_everything());
        assert!(!Role::DeliveryDirector.sees_everything());
    }

    #[test]
    fn test_display_matches_stored_value() {
        assert_eq!(Role::PracticeHead.to_string(), "practice_head");
    }
}
