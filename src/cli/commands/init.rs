use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
///  - the default administrator account
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing visitlog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    // Startup failure to reach the database is fatal; the `?` propagates
    // straight to a non-zero exit.
    let conn = Connection::open(&db_path)?;

    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Internal log (non-blocking)
    if let Err(e) = log::vlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 visitlog initialization completed!");
    Ok(())
}
