//! Users and the roles that gate the operator and admin areas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role codes stored in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Petugas,
}

impl Role {
    pub fn code(self) -> i32 {
        match self {
            Role::Admin => 1,
            Role::Petugas => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Role::Admin),
            2 => Some(Role::Petugas),
            _ => None,
        }
    }
}

/// A user row, without the password column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: i32,
    pub waduk_id: Option<i64>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::from_code(self.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }
}

/// The logged-in user, placed in request extensions by the session guard.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: i32) -> User {
        User {
            id: 7,
            username: "operator".to_string(),
            role,
            waduk_id: Some(3),
        }
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(Role::Admin.code(), 1);
        assert_eq!(Role::Petugas.code(), 2);
        assert_eq!(Role::from_code(1), Some(Role::Admin));
        assert_eq!(Role::from_code(2), Some(Role::Petugas));
        assert_eq!(Role::from_code(0), None);
        assert_eq!(Role::from_code(3), None);
    }

    #[test]
    fn test_has_role() {
        assert!(user(2).has_role(Role::Petugas));
        assert!(!user(2).has_role(Role::Admin));
        assert!(user(1).has_role(Role::Admin));
        assert!(!user(9).has_role(Role::Admin));
        assert!(!user(9).has_role(Role::Petugas));
    }

    #[test]
    fn test_user_serialize_omits_nothing_sensitive() {
        let json = serde_json::to_value(user(2)).unwrap();
        assert_eq!(json["username"], "operator");
        assert_eq!(json["waduk_id"], 3);
        assert!(json.get("password").is_none());
    }
}
