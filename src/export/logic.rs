use crate::core::report::{ReportKind, ReportRow};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_visitors;
use crate::db::users::load_all_users;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{
    UserExport, VisitorExport, report_headers, report_to_row, user_headers, user_to_row,
    visitor_headers, visitor_to_row,
};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the visitor grid.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or a period/interval expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end` pairs)
    pub fn export_visitors(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = check_output_path(file, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let visitors = load_all_visitors(pool)?;
        let rows: Vec<VisitorExport> = visitors
            .iter()
            .filter(|v| match date_bounds {
                None => true,
                Some((start, end)) => {
                    let d = v.time_in.date();
                    d >= start && d <= end
                }
            })
            .map(VisitorExport::from)
            .collect();

        if rows.is_empty() {
            warning("No visitors found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => {
                let table: Vec<Vec<String>> = rows.iter().map(visitor_to_row).collect();
                export_xlsx(&visitor_headers(), &table, path)?;
            }
        }

        Ok(())
    }

    /// Export the user-management grid (no password material).
    pub fn export_users(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = check_output_path(file, force)?;

        let users = load_all_users(pool)?;
        let rows: Vec<UserExport> = users.iter().map(UserExport::from).collect();

        if rows.is_empty() {
            warning("No user accounts to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => {
                let table: Vec<Vec<String>> = rows.iter().map(user_to_row).collect();
                export_xlsx(&user_headers(), &table, path)?;
            }
        }

        Ok(())
    }

    /// Export an already-computed report table.
    pub fn export_report(
        kind: ReportKind,
        rows: &[ReportRow],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = check_output_path(file, force)?;

        if rows.is_empty() {
            warning("No report rows for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
            ExportFormat::Xlsx => {
                let table: Vec<Vec<String>> = rows.iter().map(report_to_row).collect();
                export_xlsx(&report_headers(kind.label()), &table, path)?;
            }
        }

        Ok(())
    }
}

fn check_output_path(file: &str, force: bool) -> AppResult<&Path> {
    if !crate::utils::path::is_absolute(file) {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }

    let path = Path::new(file);
    ensure_writable(path, force)?;
    Ok(path)
}
