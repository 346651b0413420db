use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::date;

/// Run one of the fixed report aggregates; print it, or export it when
/// an output file is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        group_by,
        from,
        to,
        format,
        file,
        force,
    } = cmd
    {
        let _session = Session::load(&cfg.database)?;

        let from = date::parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
        let to = date::parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;

        if to < from {
            return Err(AppError::InvalidDate(format!(
                "range end {to} precedes range start {from}"
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let rows = ReportLogic::run(&mut pool, *group_by, from, to)?;

        if rows.is_empty() {
            info(format!("No visits between {from} and {to}."));
            return Ok(());
        }

        match file {
            Some(path) => {
                ExportLogic::export_report(*group_by, &rows, *format, path, *force)?;
            }
            None => {
                println!(
                    "\nVisitors by {} ({} – {}):\n",
                    group_by.label().to_lowercase(),
                    from,
                    to
                );
                print!("{}", ReportLogic::render(*group_by, &rows));
            }
        }
    }

    Ok(())
}
