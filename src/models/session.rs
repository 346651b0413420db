//! The record of which user is currently operating the application.
//!
//! One CLI invocation is one process, so the session outlives the process
//! as a small YAML file next to the database it was authenticated against.
//! Handlers receive the loaded Session explicitly; nothing global.

use super::role::Role;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub login_at: NaiveDateTime,
}

impl Session {
    /// Session file path for a given database path.
    pub fn file_for(db_path: &str) -> PathBuf {
        PathBuf::from(format!("{}.session", db_path))
    }

    /// Persist the session after a successful login.
    pub fn save(&self, db_path: &str) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize session: {e}")))?;
        fs::write(Self::file_for(db_path), yaml)?;
        Ok(())
    }

    /// Load the current session, or fail with NotLoggedIn.
    pub fn load(db_path: &str) -> AppResult<Self> {
        let path = Self::file_for(db_path);
        if !path.exists() {
            return Err(AppError::NotLoggedIn);
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse session file: {e}")))
    }

    /// Remove the session file (logout). Missing file is not an error.
    pub fn clear(db_path: &str) -> AppResult<()> {
        let path = Self::file_for(db_path);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Load and require the Admin role.
    pub fn require_admin(db_path: &str) -> AppResult<Self> {
        let session = Self::load(db_path)?;
        if !session.is_admin() {
            return Err(AppError::AdminRequired);
        }
        Ok(session)
    }
}
