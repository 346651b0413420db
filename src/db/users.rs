use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::User;
use crate::models::visitor::TIMESTAMP_FMT;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, rusqlite::Error> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password: row.get("password")?,
        full_name: row.get("full_name")?,
        role,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// True when the error is a violation of the `users.username` UNIQUE
/// constraint.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Insert a new account. The UNIQUE constraint makes the duplicate check
/// and the insert a single atomic statement; a violation performs no write.
pub fn insert_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    full_name: &str,
    role: Role,
    now: NaiveDateTime,
) -> AppResult<i64> {
    let now_str = now.format(TIMESTAMP_FMT).to_string();

    conn.execute(
        "INSERT INTO users (username, password, full_name, role, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![username, password_hash, full_name, role.to_db_str(), now_str],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::DuplicateUsername(username.to_string())
        } else {
            AppError::from(e)
        }
    })?;

    Ok(conn.last_insert_rowid())
}

/// Fetch at most one account row by username.
pub fn find_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?1")?;
    let user = stmt.query_row([username], map_user_row).optional()?;
    Ok(user)
}

pub fn load_user(conn: &Connection, id: i64) -> AppResult<User> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?1")?;
    let user = stmt.query_row([id], map_user_row).optional()?;
    user.ok_or(AppError::UserNotFound(id))
}

pub fn load_all_users(pool: &mut DbPool) -> AppResult<Vec<User>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM users ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the stored hash; refreshes updated_at.
pub fn update_password(
    conn: &Connection,
    id: i64,
    password_hash: &str,
    now: NaiveDateTime,
) -> AppResult<()> {
    let updated = conn.execute(
        "UPDATE users SET password = ?1, updated_at = ?2 WHERE id = ?3",
        params![password_hash, now.format(TIMESTAMP_FMT).to_string(), id],
    )?;

    if updated == 0 {
        return Err(AppError::UserNotFound(id));
    }
    Ok(())
}

pub fn delete_user(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    Ok(n)
}
