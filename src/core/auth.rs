//! Authentication: password hashing and the login check.

use crate::db::pool::DbPool;
use crate::db::users::find_by_username;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::NaiveDateTime;

/// Hash a clear-text password into a salted Argon2 PHC string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Other(format!("password hashing failed: {e}")))
}

/// Verify a clear-text password against a stored PHC string.
/// A malformed stored hash verifies as false, never as an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub struct AuthLogic;

impl AuthLogic {
    /// The login check: fetch at most one account row for the username,
    /// verify the password, and build the session value object.
    /// Unknown username and wrong password are indistinguishable.
    pub fn login(
        pool: &mut DbPool,
        username: &str,
        password: &str,
        now: NaiveDateTime,
    ) -> AppResult<Session> {
        let user =
            find_by_username(&pool.conn, username)?.ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(Session {
            user_id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            login_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("letmein42").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("letmein42", &hash));
        assert!(!verify_password("letmein43", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
