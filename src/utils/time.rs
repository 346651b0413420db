//! Time utilities: parsing free-text times of day (12h and 24h forms).

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted time-of-day formats, tried in order:
/// 12-hour with AM/PM ("2:30 PM", "02:30PM", with optional seconds),
/// then 24-hour ("14:30", "14:30:00").
const TIME_FORMATS: &[&str] = &[
    "%I:%M %p",
    "%I:%M:%S %p",
    "%I:%M%p",
    "%I:%M:%S%p",
    "%H:%M",
    "%H:%M:%S",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a timestamp entered on the CLI: a full "YYYY-MM-DD HH:MM[:SS]"
/// instant, or a bare time of day combined with `today`.
pub fn parse_datetime_input(s: &str, today: NaiveDate) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    if let Some(t) = parse_time(s) {
        return Ok(today.and_time(t));
    }

    Err(AppError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24h_forms() {
        assert_eq!(parse_time("14:30"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_time("14:30:45"), NaiveTime::from_hms_opt(14, 30, 45));
    }

    #[test]
    fn parses_12h_forms() {
        assert_eq!(parse_time("2:30 PM"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("02:30 pm"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("2:30PM"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("12:05 AM"), NaiveTime::from_hms_opt(0, 5, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_time("half past nine"), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time(""), None);
    }
}
