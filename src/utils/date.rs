use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let diff = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(diff)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First day of the month preceding the one containing `date`.
pub fn start_of_prev_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    start_of_month(first - Duration::days(1))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2024-01-10 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(start_of_week(wed), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        // Monday maps to itself
        let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(start_of_week(mon), mon);

        // Sunday belongs to the preceding Monday
        let sun = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(start_of_week(sun), mon);
    }

    #[test]
    fn previous_month_crosses_year_boundary() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            start_of_prev_month(jan),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
    }
}
