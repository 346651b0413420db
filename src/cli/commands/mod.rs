pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod qr;
pub mod report;
pub mod user;
pub mod visitor;

use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Read a password from stdin when it was not passed as a flag.
pub(crate) fn read_password(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
