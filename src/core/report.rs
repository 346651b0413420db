//! Report aggregation: a fixed menu of GROUP BY queries over an inclusive
//! date range. Each row carries the category, total count, completed count
//! and active count.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::Table;
use chrono::NaiveDate;
use rusqlite::params;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    Day,
    Gender,
    ClientType,
    Purpose,
}

impl ReportKind {
    /// The grouping expression. NULL and '' column values group under
    /// "(none)" so totals always partition the range.
    fn category_sql(&self) -> &'static str {
        match self {
            ReportKind::Day => "date(time_in)",
            ReportKind::Gender => "COALESCE(NULLIF(gender, ''), '(none)')",
            ReportKind::ClientType => "COALESCE(NULLIF(client_type, ''), '(none)')",
            ReportKind::Purpose => "COALESCE(NULLIF(purpose, ''), '(none)')",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Day => "Day",
            ReportKind::Gender => "Gender",
            ReportKind::ClientType => "Client Type",
            ReportKind::Purpose => "Purpose",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub category: String,
    pub total: i64,
    pub completed: i64,
    pub active: i64,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Run one aggregate over `[from, to]` (inclusive, whole days).
    pub fn run(
        pool: &mut DbPool,
        kind: ReportKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ReportRow>> {
        let sql = format!(
            "SELECT {cat} AS category,
                    COUNT(*) AS total,
                    SUM(CASE WHEN time_out IS NOT NULL AND time_out != '' THEN 1 ELSE 0 END) AS completed,
                    SUM(CASE WHEN time_out IS NULL OR time_out = '' THEN 1 ELSE 0 END) AS active
             FROM visitors
             WHERE date(time_in) BETWEEN ?1 AND ?2
             GROUP BY category
             ORDER BY category ASC",
            cat = kind.category_sql()
        );

        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string(),
            ],
            |row| {
                Ok(ReportRow {
                    category: row.get(0)?,
                    total: row.get(1)?,
                    completed: row.get(2)?,
                    active: row.get(3)?,
                })
            },
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn render(kind: ReportKind, rows: &[ReportRow]) -> String {
        let table_rows = rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.total.to_string(),
                    r.completed.to_string(),
                    r.active.to_string(),
                ]
            })
            .collect();

        Table::auto(&[kind.label(), "Total", "Completed", "Active"], table_rows).render()
    }
}
