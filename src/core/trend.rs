//! Percentage-change trend text for the dashboard stat tiles.

/// Trend of a count against the previous period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    /// No previous data, no current data either.
    NoData,
    /// No previous data, but the current period has entries.
    NewData,
    /// Percentage change relative to the previous period.
    Percent(f64),
}

/// `previous == 0` is a distinct label, never a division.
pub fn compute_trend(current: i64, previous: i64) -> Trend {
    if previous == 0 {
        if current > 0 {
            Trend::NewData
        } else {
            Trend::NoData
        }
    } else {
        Trend::Percent(((current - previous) as f64 / previous as f64) * 100.0)
    }
}

/// Human-readable trend line, e.g. "+50.0% from yesterday".
pub fn trend_label(current: i64, previous: i64, suffix: &str) -> String {
    match compute_trend(current, previous) {
        Trend::NoData => "No data".to_string(),
        Trend::NewData => "New data".to_string(),
        Trend::Percent(p) => {
            let sign = if p >= 0.0 { "+" } else { "" };
            format!("{}{:.1}% {}", sign, p, suffix)
        }
    }
}

/// The percentage, when one exists (used for trend coloring).
pub fn trend_percent(current: i64, previous: i64) -> Option<f64> {
    match compute_trend(current, previous) {
        Trend::Percent(p) => Some(p),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_previous_never_divides() {
        assert_eq!(compute_trend(0, 0), Trend::NoData);
        assert_eq!(compute_trend(5, 0), Trend::NewData);
        assert_eq!(trend_label(0, 0, "from yesterday"), "No data");
        assert_eq!(trend_label(5, 0, "from yesterday"), "New data");
    }

    #[test]
    fn fifty_percent_up() {
        assert_eq!(trend_label(15, 10, "from yesterday"), "+50.0% from yesterday");
    }

    #[test]
    fn drops_are_signed_by_the_number_itself() {
        assert_eq!(trend_label(5, 10, "from last week"), "-50.0% from last week");
    }

    #[test]
    fn flat_counts_read_as_plus_zero() {
        assert_eq!(trend_label(10, 10, "from last month"), "+0.0% from last month");
    }
}
