use crate::cli::commands::read_password;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => read_password("Password")?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let session = AuthLogic::login(&mut pool, username, &password, date::now())?;
        session.save(&cfg.database)?;

        success(format!(
            "Logged in as {} ({})",
            session.username,
            session.role.to_db_str()
        ));
    }

    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    Session::clear(&cfg.database)?;
    info("Logged out.");
    Ok(())
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    let session = Session::load(&cfg.database)?;

    println!(
        "{} ({}) - {} - logged in since {}",
        session.username,
        session.role.to_db_str(),
        session.full_name,
        session.login_at.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
