//! Checkout: close an active visit, with optional manual time entry.

use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_visitor, set_time_out};
use crate::errors::{AppError, AppResult};
use crate::models::visitor::Visitor;
use crate::ui::messages::success;
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveDateTime};

/// Resolve a manually entered checkout time against the visit's time-in.
///
/// The input is a bare time of day. It is combined with today's date; when
/// the resulting instant precedes time-in and time-in is also today, the
/// date rolls forward exactly one day (checkout crossed local midnight).
/// The resolved instant must not precede time-in nor exceed `now`.
pub fn resolve_checkout(
    input: &str,
    time_in: NaiveDateTime,
    now: NaiveDateTime,
) -> AppResult<NaiveDateTime> {
    let t = parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))?;

    let mut candidate = now.date().and_time(t);

    if candidate < time_in && time_in.date() == now.date() {
        candidate += Duration::days(1);
    }

    if candidate < time_in {
        return Err(AppError::CheckoutBeforeTimeIn(candidate.to_string()));
    }
    if candidate > now {
        return Err(AppError::CheckoutInFuture(candidate.to_string()));
    }

    Ok(candidate)
}

pub struct CheckoutLogic;

impl CheckoutLogic {
    /// Check a visitor out. Only permitted while the visit is active;
    /// without a manual time the checkout instant is `now`.
    pub fn apply(
        pool: &mut DbPool,
        id: i64,
        manual_time: Option<&String>,
        now: NaiveDateTime,
    ) -> AppResult<Visitor> {
        let visitor = load_visitor(&pool.conn, id)?;

        if visitor.time_out.is_some() {
            return Err(AppError::AlreadyCheckedOut(id));
        }

        let time_out = match manual_time {
            Some(input) => resolve_checkout(input, visitor.time_in, now)?,
            None => now,
        };

        // The WHERE clause re-checks the active state, so a concurrent
        // checkout loses cleanly instead of overwriting.
        let updated = set_time_out(&pool.conn, id, time_out)?;
        if updated == 0 {
            return Err(AppError::AlreadyCheckedOut(id));
        }

        let _ = vlog(
            &pool.conn,
            "checkout",
            &id.to_string(),
            &format!("Visitor '{}' checked out at {}", visitor.name, time_out),
        );

        success(format!(
            "Visitor '{}' successfully checked out at {}.",
            visitor.name,
            time_out.format("%Y-%m-%d %H:%M:%S")
        ));

        let mut updated_visitor = visitor;
        updated_visitor.time_out = Some(time_out);
        Ok(updated_visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn next_morning_checkout_lands_on_the_following_day() {
        // Time-in 2024-01-10 09:00, checkout entered as "08:30" the next
        // morning → 2024-01-11 08:30:00.
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 11, 9, 15);

        let resolved = resolve_checkout("08:30", time_in, now).unwrap();
        assert_eq!(resolved, dt(2024, 1, 11, 8, 30));
    }

    #[test]
    fn same_day_earlier_time_rolls_forward_once_then_hits_future_check() {
        // Entered on the check-in day itself, 08:30 is before the 09:00
        // time-in, so it rolls to tomorrow, which is in the future.
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 10, 23, 0);

        let err = resolve_checkout("08:30", time_in, now).unwrap_err();
        assert!(matches!(err, AppError::CheckoutInFuture(_)));
    }

    #[test]
    fn same_day_checkout_between_time_in_and_now_is_accepted() {
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 10, 17, 0);

        let resolved = resolve_checkout("16:45", time_in, now).unwrap();
        assert_eq!(resolved, dt(2024, 1, 10, 16, 45));
    }

    #[test]
    fn twelve_hour_input_is_accepted() {
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 10, 17, 0);

        let resolved = resolve_checkout("4:45 PM", time_in, now).unwrap();
        assert_eq!(resolved, dt(2024, 1, 10, 16, 45));
    }

    #[test]
    fn future_time_is_rejected() {
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 10, 17, 0);

        let err = resolve_checkout("17:30", time_in, now).unwrap_err();
        assert!(matches!(err, AppError::CheckoutInFuture(_)));
    }

    #[test]
    fn time_before_a_future_dated_time_in_is_rejected() {
        // time_in was edited to a later date; no roll applies and the
        // candidate stays before it.
        let time_in = dt(2024, 1, 12, 9, 0);
        let now = dt(2024, 1, 10, 17, 0);

        let err = resolve_checkout("08:00", time_in, now).unwrap_err();
        assert!(matches!(err, AppError::CheckoutBeforeTimeIn(_)));
    }

    #[test]
    fn garbage_input_is_rejected() {
        let time_in = dt(2024, 1, 10, 9, 0);
        let now = dt(2024, 1, 10, 17, 0);

        let err = resolve_checkout("soon", time_in, now).unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));
    }
}
