use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "User" => Some(Role::User),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
