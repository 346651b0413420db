use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::session::Session;

/// Export the visitor grid (or the user grid) to csv/json/xlsx.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        users,
        force,
    } = cmd
    {
        let _session = Session::load(&cfg.database)?;

        let mut pool = DbPool::new(&cfg.database)?;

        if *users {
            ExportLogic::export_users(&mut pool, *format, file, *force)?;
        } else {
            ExportLogic::export_visitors(&mut pool, *format, file, range, *force)?;
        }
    }

    Ok(())
}
