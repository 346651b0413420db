use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::Export(
                "start and end must have the same format".to_string(),
            ));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys: i32 = start
                    .parse()
                    .map_err(|_| AppError::InvalidDate(start.to_string()))?;
                let ye: i32 = end
                    .parse()
                    .map_err(|_| AppError::InvalidDate(end.to_string()))?;

                let d1 = NaiveDate::from_ymd_opt(ys, 1, 1)
                    .ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
                let d2 = NaiveDate::from_ymd_opt(ye, 12, 31)
                    .ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
                Ok((d1, d2))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let d1 = parse_month_start(start)?;
                let d2 = parse_month_end(end)?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => {
                let d1 = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(start.to_string()))?;
                let d2 = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(end.to_string()))?;
                Ok((d1, d2))
            }
            _ => Err(AppError::Export(format!("unsupported range format: {r}"))),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r.parse().map_err(|_| AppError::InvalidDate(r.to_string()))?;
                let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                    .ok_or_else(|| AppError::InvalidDate(r.to_string()))?;
                let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                    .ok_or_else(|| AppError::InvalidDate(r.to_string()))?;
                Ok((d1, d2))
            }
            // YYYY-MM
            7 => Ok((parse_month_start(r)?, parse_month_end(r)?)),
            // YYYY-MM-DD
            10 => {
                let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(r.to_string()))?;
                Ok((d, d))
            }
            _ => Err(AppError::Export(format!("unsupported --range format: {r}"))),
        }
    }
}

fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let y: i32 = s
        .get(0..4)
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    let m: u32 = s
        .get(5..7)
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    Ok((y, m))
}

fn parse_month_start(s: &str) -> AppResult<NaiveDate> {
    let (y, m) = parse_month(s)?;
    NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn parse_month_end(s: &str) -> AppResult<NaiveDate> {
    let (y, m) = parse_month(s)?;
    let last = month_last_day(y, m).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_period_forms() {
        assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
        assert_eq!(parse_range("2025-02").unwrap(), (d(2025, 2, 1), d(2025, 2, 28)));
        assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(
            parse_range("2025-06-18").unwrap(),
            (d(2025, 6, 18), d(2025, 6, 18))
        );
    }

    #[test]
    fn interval_forms() {
        assert_eq!(
            parse_range("2024:2025").unwrap(),
            (d(2024, 1, 1), d(2025, 12, 31))
        );
        assert_eq!(
            parse_range("2025-06:2025-08").unwrap(),
            (d(2025, 6, 1), d(2025, 8, 31))
        );
        assert_eq!(
            parse_range("2025-06-01:2025-06-10").unwrap(),
            (d(2025, 6, 1), d(2025, 6, 10))
        );
    }

    #[test]
    fn mismatched_and_garbage_forms_fail() {
        assert!(parse_range("2025-06:2025").is_err());
        assert!(parse_range("June 2025").is_err());
        assert!(parse_range("2025-6").is_err());
    }
}
