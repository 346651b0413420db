use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::models::session::Session;
use crate::utils::date;
use crate::utils::time::parse_datetime_input;

/// Check a visitor in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        name,
        gender,
        client_type,
        office,
        purpose,
        time_in,
    } = cmd
    {
        // Any logged-in operator may record check-ins.
        let _session = Session::load(&cfg.database)?;

        let gender = Gender::from_input(gender)
            .ok_or_else(|| AppError::InvalidGender(gender.to_string()))?;

        let client_type = ClientType::from_input(client_type)
            .ok_or_else(|| AppError::InvalidClientType(client_type.to_string()))?;

        let now = date::now();

        let time_in = match time_in {
            Some(s) => Some(parse_datetime_input(s, now.date())?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        CheckinLogic::apply(
            &mut pool,
            name,
            gender,
            client_type,
            office,
            purpose,
            time_in,
            now,
        )?;
    }

    Ok(())
}
