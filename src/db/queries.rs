use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::models::visitor::{TIMESTAMP_FMT, Visitor};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, rusqlite::Error> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Visitor> {
    let time_in_str: String = row.get("time_in")?;
    let time_in = parse_timestamp(&time_in_str)?;

    // Some historical rows carry '' where NULL was meant; treat both as unset.
    let time_out_str: Option<String> = row.get("time_out")?;
    let time_out = match time_out_str.as_deref() {
        None | Some("") => None,
        Some(s) => Some(parse_timestamp(s)?),
    };

    let gender_str: Option<String> = row.get("gender")?;
    let gender_str = gender_str.unwrap_or_default();
    let gender = Gender::from_db_str(&gender_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidGender(gender_str.clone())),
        )
    })?;

    let ct_str: Option<String> = row.get("client_type")?;
    let ct_str = ct_str.unwrap_or_default();
    let client_type = ClientType::from_db_str(&ct_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidClientType(ct_str.clone())),
        )
    })?;

    Ok(Visitor {
        id: row.get("id")?,
        name: row.get("name")?,
        gender,
        client_type,
        office: row.get::<_, Option<String>>("office")?.unwrap_or_default(),
        purpose: row.get::<_, Option<String>>("purpose")?.unwrap_or_default(),
        time_in,
        time_out,
    })
}

pub fn insert_visitor(conn: &Connection, v: &Visitor) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO visitors (name, gender, client_type, office, purpose, time_in, time_out)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            v.name,
            v.gender.to_db_str(),
            v.client_type.to_db_str(),
            v.office,
            v.purpose,
            v.time_in_str(),
            v.time_out.map(|t| t.format(TIMESTAMP_FMT).to_string()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a visitor (all columns except id). Edits may rewrite anything,
/// including time-in and time-out.
pub fn update_visitor(conn: &Connection, v: &Visitor) -> AppResult<()> {
    let updated = conn.execute(
        "UPDATE visitors
         SET name = ?1, gender = ?2, client_type = ?3,
             office = ?4, purpose = ?5,
             time_in = ?6, time_out = ?7
         WHERE id = ?8",
        params![
            v.name,
            v.gender.to_db_str(),
            v.client_type.to_db_str(),
            v.office,
            v.purpose,
            v.time_in_str(),
            v.time_out.map(|t| t.format(TIMESTAMP_FMT).to_string()),
            v.id,
        ],
    )?;

    if updated == 0 {
        return Err(AppError::VisitorNotFound(v.id));
    }
    Ok(())
}

pub fn delete_visitor(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM visitors WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn load_visitor(conn: &Connection, id: i64) -> AppResult<Visitor> {
    let mut stmt = conn.prepare("SELECT * FROM visitors WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_row)?;

    match rows.next() {
        Some(v) => Ok(v?),
        None => Err(AppError::VisitorNotFound(id)),
    }
}

/// Full grid load, newest check-in first. Search and date filters are
/// applied by the caller against this result set.
pub fn load_all_visitors(pool: &mut DbPool) -> AppResult<Vec<Visitor>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM visitors ORDER BY time_in DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Close out an active visit. Returns the number of rows updated:
/// 0 means the visitor was already checked out (or does not exist).
pub fn set_time_out(conn: &Connection, id: i64, time_out: NaiveDateTime) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE visitors
         SET time_out = ?1
         WHERE id = ?2 AND (time_out IS NULL OR time_out = '')",
        params![time_out.format(TIMESTAMP_FMT).to_string(), id],
    )?;
    Ok(n)
}

/// Count check-ins in the half-open window [start, end).
pub fn count_between(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM visitors WHERE time_in >= ?1 AND time_in < ?2",
        params![
            start.format(TIMESTAMP_FMT).to_string(),
            end.format(TIMESTAMP_FMT).to_string(),
        ],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Visitors who checked in on `today` and have not checked out yet.
pub fn count_active(conn: &Connection, today: NaiveDate) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM visitors
         WHERE date(time_in) = ?1
           AND (time_out IS NULL OR time_out = '')",
        [today.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// The newest check-ins of the day, for the dashboard activity feed.
pub fn recent_today(
    conn: &Connection,
    today: NaiveDate,
    limit: usize,
) -> AppResult<Vec<Visitor>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM visitors
         WHERE date(time_in) = ?1
         ORDER BY time_in DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(
        params![today.format("%Y-%m-%d").to_string(), limit as i64],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
