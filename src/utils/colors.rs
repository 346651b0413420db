/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Trend color: positive → green, negative → red, flat/no-data → grey.
pub fn color_for_trend(percent: Option<f64>) -> &'static str {
    match percent {
        Some(p) if p > 0.0 => GREEN,
        Some(p) if p < 0.0 => RED,
        _ => GREY,
    }
}

/// Returns GREY for an empty optional value, RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}
