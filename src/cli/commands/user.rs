use crate::cli::commands::{ask_confirmation, read_password};
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::user::UserLogic;
use crate::db::pool::DbPool;
use crate::db::users::load_all_users;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::session::Session;
use crate::models::user::User;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::Table;

/// Administration of user accounts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let session = Session::require_admin(&cfg.database)?;

        match action {
            UserAction::Add {
                username,
                full_name,
                role,
                password,
            } => {
                let role = Role::from_input(role)
                    .ok_or_else(|| AppError::InvalidRole(role.to_string()))?;

                let password = match password {
                    Some(p) => p.clone(),
                    None => {
                        let first = read_password("Password")?;
                        let second = read_password("Confirm password")?;
                        if first != second {
                            return Err(AppError::Other("passwords do not match".to_string()));
                        }
                        first
                    }
                };

                let mut pool = DbPool::new(&cfg.database)?;
                UserLogic::add(&mut pool, username, &password, full_name, role, date::now())?;
            }

            UserAction::List { search } => {
                let mut pool = DbPool::new(&cfg.database)?;
                let users = load_all_users(&mut pool)?;

                let filtered: Vec<&User> = users
                    .iter()
                    .filter(|u| match search {
                        Some(needle) => {
                            let needle = needle.to_lowercase();
                            u.username.to_lowercase().contains(&needle)
                                || u.full_name.to_lowercase().contains(&needle)
                        }
                        None => true,
                    })
                    .collect();

                print_grid(&filtered);
            }

            UserAction::Passwd { id, password } => {
                let password = match password {
                    Some(p) => p.clone(),
                    None => {
                        let first = read_password("New password")?;
                        let second = read_password("Confirm new password")?;
                        if first != second {
                            return Err(AppError::Other("passwords do not match".to_string()));
                        }
                        first
                    }
                };

                let mut pool = DbPool::new(&cfg.database)?;
                UserLogic::change_password(&mut pool, *id, &password, date::now())?;
            }

            UserAction::Del { id } => {
                if *id == session.user_id {
                    return Err(AppError::Other(
                        "cannot delete the currently logged-in user".to_string(),
                    ));
                }

                let prompt = format!("Delete user #{}? This action cannot be undone.", id);
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let mut pool = DbPool::new(&cfg.database)?;
                UserLogic::delete(&mut pool, *id)?;
            }
        }
    }

    Ok(())
}

fn print_grid(users: &[&User]) {
    if users.is_empty() {
        println!("No user accounts found.");
        println!("0 Total Users");
        return;
    }

    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.full_name.clone(),
                u.role.to_db_str().to_string(),
                u.created_at.format("%m/%d/%Y %I:%M %p").to_string(),
                u.updated_at.format("%m/%d/%Y %I:%M %p").to_string(),
            ]
        })
        .collect();

    let table = Table::auto(
        &["ID", "Username", "Full Name", "Role", "Created", "Updated"],
        rows,
    );

    print!("{}", table.render());
    println!("{} Total Users", users.len());
}
