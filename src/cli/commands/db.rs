use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Database maintenance: info, integrity check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                warning(format!("Database integrity check reported: {}", result));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized (VACUUM).");
        }

        if !*info && !*check && !*vacuum {
            warning("Nothing to do: specify --info, --check or --vacuum.");
        }
    }

    Ok(())
}
