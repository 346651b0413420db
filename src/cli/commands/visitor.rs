use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, VisitorAction};
use crate::config::Config;
use crate::core::visitor::{VisitorEdit, VisitorLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::time::parse_datetime_input;

/// Admin maintenance of visitor records.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Visitor { action } = cmd {
        // Record maintenance is an administrator surface.
        let _session = Session::require_admin(&cfg.database)?;

        match action {
            VisitorAction::Edit {
                id,
                name,
                gender,
                client_type,
                office,
                purpose,
                time_in,
                time_out,
                clear_time_out,
            } => {
                let today = date::today();

                let gender = match gender {
                    Some(g) => Some(
                        Gender::from_input(g)
                            .ok_or_else(|| AppError::InvalidGender(g.to_string()))?,
                    ),
                    None => None,
                };

                let client_type = match client_type {
                    Some(ct) => Some(
                        ClientType::from_input(ct)
                            .ok_or_else(|| AppError::InvalidClientType(ct.to_string()))?,
                    ),
                    None => None,
                };

                let time_in = match time_in {
                    Some(s) => Some(parse_datetime_input(s, today)?),
                    None => None,
                };

                let time_out = match time_out {
                    Some(s) => Some(parse_datetime_input(s, today)?),
                    None => None,
                };

                let edit = VisitorEdit {
                    name: name.clone(),
                    gender,
                    client_type,
                    office: office.clone(),
                    purpose: purpose.clone(),
                    time_in,
                    time_out,
                    clear_time_out: *clear_time_out,
                };

                let mut pool = DbPool::new(&cfg.database)?;
                VisitorLogic::edit(&mut pool, *id, edit)?;
            }

            VisitorAction::Del { id } => {
                let prompt = format!(
                    "Delete visitor record #{}? This action cannot be undone.",
                    id
                );

                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let mut pool = DbPool::new(&cfg.database)?;
                VisitorLogic::delete(&mut pool, *id)?;
            }
        }
    }

    Ok(())
}
