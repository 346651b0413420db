use crate::core::report::ReportKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for visitlog
/// CLI application to run a front-desk visitor logbook with SQLite
#[derive(Parser)]
#[command(
    name = "visitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A front-desk visitor logbook: check visitors in and out, report and export using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and start an operator session
    Login {
        /// Username of the account
        username: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the current operator session
    Logout,

    /// Show the current operator session
    Whoami,

    /// Check a visitor in
    Checkin {
        /// Visitor name
        name: String,

        #[arg(long, help = "Gender: male, female or other")]
        gender: String,

        #[arg(
            long = "client-type",
            help = "Client type: student, employee, job-seeker, researcher or guest"
        )]
        client_type: String,

        #[arg(long, help = "Office or institution the visitor comes from")]
        office: String,

        #[arg(long, help = "Purpose of the visit")]
        purpose: String,

        /// Time-in override (defaults to now); "HH:MM" or "YYYY-MM-DD HH:MM"
        #[arg(long = "time-in")]
        time_in: Option<String>,
    },

    /// Check a visitor out
    Checkout {
        /// Visitor record id
        id: i64,

        /// Manual checkout time of day (e.g. "16:45" or "4:45 PM");
        /// defaults to now
        #[arg(long)]
        time: Option<String>,
    },

    /// List visitor records (newest first)
    List {
        #[arg(long, help = "Filter by case-insensitive name substring")]
        search: Option<String>,

        #[arg(long, help = "Only visits on or after this date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Only visits on or before this date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Only today's visitors who have not checked out")]
        active: bool,
    },

    /// Manage visitor records (admin)
    Visitor {
        #[command(subcommand)]
        action: VisitorAction,
    },

    /// Manage user accounts (admin)
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show today's statistics, recent activity and the weekly chart
    Dashboard,

    /// Aggregate reports over a date range
    Report {
        #[arg(long = "group-by", value_enum, help = "Grouping: day, gender, client-type or purpose")]
        group_by: ReportKind,

        /// Range start (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: String,

        /// Range end (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Export the report to this file instead of printing it
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Export the visitor or user grid
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export user accounts instead of visitors")]
        users: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate a visitor badge QR code (PNG)
    Qr {
        #[arg(long)]
        name: String,

        #[arg(long)]
        gender: String,

        #[arg(long = "client-type")]
        client_type: String,

        #[arg(long)]
        office: String,

        #[arg(long)]
        purpose: String,

        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Manage the database (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum VisitorAction {
    /// Edit any column of a visitor record
    Edit {
        /// Visitor record id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long = "client-type")]
        client_type: Option<String>,

        #[arg(long)]
        office: Option<String>,

        #[arg(long)]
        purpose: Option<String>,

        /// New time-in; "HH:MM" or "YYYY-MM-DD HH:MM"
        #[arg(long = "time-in")]
        time_in: Option<String>,

        /// New time-out; "HH:MM" or "YYYY-MM-DD HH:MM"
        #[arg(long = "time-out", conflicts_with = "clear_time_out")]
        time_out: Option<String>,

        /// Clear time-out (re-open the visit)
        #[arg(long = "clear-time-out")]
        clear_time_out: bool,
    },

    /// Delete a visitor record
    Del {
        /// Visitor record id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user account
    Add {
        username: String,

        #[arg(long = "full-name")]
        full_name: String,

        #[arg(long, default_value = "user", help = "Role: admin or user")]
        role: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// List user accounts
    List {
        #[arg(long, help = "Filter by username or full-name substring")]
        search: Option<String>,
    },

    /// Change an account's password
    Passwd {
        /// User account id
        id: i64,

        /// New password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete a user account
    Del {
        /// User account id
        id: i64,
    },
}
