//! User account management (admin only at the CLI layer).

use crate::core::auth::hash_password;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::users::{delete_user, insert_user, load_user, update_password};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::User;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct UserLogic;

impl UserLogic {
    /// Create an account. The username's UNIQUE constraint makes the
    /// duplicate check and the insert one atomic statement; on conflict
    /// nothing is written.
    pub fn add(
        pool: &mut DbPool,
        username: &str,
        password: &str,
        full_name: &str,
        role: Role,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let username = username.trim();
        let full_name = full_name.trim();

        if username.is_empty() {
            return Err(AppError::MissingField("username"));
        }
        if full_name.is_empty() {
            return Err(AppError::MissingField("full name"));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let hash = hash_password(password)?;
        let id = insert_user(&pool.conn, username, &hash, full_name, role, now)?;

        let _ = vlog(
            &pool.conn,
            "user_add",
            username,
            &format!("User '{}' created with role {}", username, role.to_db_str()),
        );

        success(format!("User '{}' added successfully!", username));
        Ok(id)
    }

    /// Change an account's password; refreshes updated_at.
    pub fn change_password(
        pool: &mut DbPool,
        id: i64,
        new_password: &str,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        let user = load_user(&pool.conn, id)?;
        let hash = hash_password(new_password)?;
        update_password(&pool.conn, id, &hash, now)?;

        let _ = vlog(
            &pool.conn,
            "user_passwd",
            &user.username,
            "Password changed",
        );

        success(format!("Password changed for '{}'.", user.username));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<User> {
        let user = load_user(&pool.conn, id)?;

        let deleted = delete_user(&pool.conn, id)?;
        if deleted == 0 {
            return Err(AppError::UserNotFound(id));
        }

        let _ = vlog(
            &pool.conn,
            "user_del",
            &user.username,
            &format!("User '{}' deleted", user.username),
        );

        success(format!("User '{}' deleted successfully!", user.username));
        Ok(user)
    }
}
