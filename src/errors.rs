//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (use 12:30 PM or 14:30)")]
    InvalidTime(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Invalid client type: {0}")]
    InvalidClientType(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Logbook logic errors
    // ---------------------------
    #[error("Visitor {0} not found")]
    VisitorNotFound(i64),

    #[error("Visitor {0} is already checked out")]
    AlreadyCheckedOut(i64),

    #[error("Checkout time {0} is before the visit's time-in")]
    CheckoutBeforeTimeIn(String),

    #[error("Checkout time {0} is in the future")]
    CheckoutInFuture(String),

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Accounts and authorization
    // ---------------------------
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Not logged in (run `visitlog login <username>` first)")]
    NotLoggedIn,

    #[error("This operation requires the Admin role")]
    AdminRequired,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // QR generation
    // ---------------------------
    #[error("QR generation error: {0}")]
    Qr(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
