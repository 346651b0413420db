use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::utils::date;

/// Show the dashboard: stat tiles, active-now, recent activity, weekly chart.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let _session = Session::load(&cfg.database)?;

    let mut pool = DbPool::new(&cfg.database)?;

    let data = DashboardLogic::load(&mut pool, date::now(), cfg)?;
    DashboardLogic::render(&data, cfg);

    Ok(())
}
