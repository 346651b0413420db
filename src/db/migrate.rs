use crate::core::auth;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `visitors` table.
fn ensure_visitors_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS visitors (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            gender      TEXT,
            client_type TEXT,
            office      TEXT,
            purpose     TEXT,
            time_in     TEXT NOT NULL,
            time_out    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_visitors_time_in ON visitors(time_in);
        "#,
    )?;
    Ok(())
}

/// Create the `users` table.
///
/// Username uniqueness lives in the schema, so duplicate inserts fail
/// atomically instead of relying on a separate existence check.
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            full_name   TEXT NOT NULL,
            role        TEXT NOT NULL CHECK(role IN ('Admin','User')),
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Seed the default administrator when the `users` table is empty.
pub fn seed_default_admin(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let hash = auth::hash_password("admin123").map_err(|e| {
        rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::other(e.to_string())))
    })?;

    let now = chrono::Local::now()
        .naive_local()
        .format(crate::models::visitor::TIMESTAMP_FMT)
        .to_string();

    conn.execute(
        "INSERT INTO users (username, password, full_name, role, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        rusqlite::params!["admin", hash, "System Administrator", "Admin", now],
    )?;

    success("Seeded default administrator account (admin).");
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(); every statement is idempotent so this is safe
/// to run on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let fresh = !table_exists(conn, "visitors")?;

    ensure_log_table(conn)?;
    ensure_visitors_table(conn)?;
    ensure_users_table(conn)?;

    if fresh {
        success("Created logbook schema (visitors, users, log).");
    }

    seed_default_admin(conn)?;

    Ok(())
}
