//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// "MM/DD/YYYY" date column, as shown in the logbook grid.
pub fn grid_date(dt: &NaiveDateTime) -> String {
    dt.format("%m/%d/%Y").to_string()
}

/// "hh:mm AM/PM" time column, as shown in the logbook grid.
pub fn grid_time(dt: &NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

/// Time-out cell: empty while the visit is still open.
pub fn grid_time_opt(dt: &Option<NaiveDateTime>) -> String {
    dt.as_ref().map(grid_time).unwrap_or_default()
}
