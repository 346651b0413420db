use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkout::CheckoutLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::utils::date;

/// Check a visitor out, with optional manual time entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { id, time } = cmd {
        let _session = Session::load(&cfg.database)?;

        let mut pool = DbPool::new(&cfg.database)?;

        CheckoutLogic::apply(&mut pool, *id, time.as_ref(), date::now())?;
    }

    Ok(())
}
