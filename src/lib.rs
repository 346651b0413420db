//! visitlog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod qr;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::login::handle_logout(cfg),
        Commands::Whoami => cli::commands::login::handle_whoami(cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg),
        Commands::Checkout { .. } => cli::commands::checkout::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Visitor { .. } => cli::commands::visitor::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Qr { .. } => cli::commands::qr::handle(&cli.command),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --db overrides the configured database path.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
