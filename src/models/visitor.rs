use super::{client_type::ClientType, gender::Gender};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Timestamp format used for the `time_in` / `time_out` TEXT columns.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct Visitor {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub client_type: ClientType,
    pub office: String,
    pub purpose: String,
    pub time_in: NaiveDateTime,             // ⇔ visitors.time_in (TEXT "YYYY-MM-DD HH:MM:SS")
    pub time_out: Option<NaiveDateTime>,    // ⇔ visitors.time_out (nullable)
}

impl Visitor {
    /// Constructor for records created from the check-in form.
    /// `time_out` starts unset; the record is active until checkout.
    pub fn new(
        id: i64,
        name: String,
        gender: Gender,
        client_type: ClientType,
        office: String,
        purpose: String,
        time_in: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            gender,
            client_type,
            office,
            purpose,
            time_in,
            time_out: None,
        }
    }

    pub fn time_in_str(&self) -> String {
        self.time_in.format(TIMESTAMP_FMT).to_string()
    }

    pub fn time_out_str(&self) -> String {
        self.time_out
            .map(|t| t.format(TIMESTAMP_FMT).to_string())
            .unwrap_or_default()
    }

    /// Active iff time-out is unset and the check-in happened on `today`.
    /// Once time-out is set the record is never reported active again.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.time_out.is_none() && self.time_in.date() == today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn visitor(time_in: &str, time_out: Option<&str>) -> Visitor {
        let mut v = Visitor::new(
            1,
            "Jane Roe".into(),
            Gender::Female,
            ClientType::Guest,
            "Records Office".into(),
            "Document request".into(),
            NaiveDateTime::parse_from_str(time_in, TIMESTAMP_FMT).unwrap(),
        );
        v.time_out = time_out.map(|t| NaiveDateTime::parse_from_str(t, TIMESTAMP_FMT).unwrap());
        v
    }

    #[test]
    fn active_requires_same_day_and_no_checkout() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        assert!(visitor("2024-01-10 09:00:00", None).is_active(today));
        assert!(!visitor("2024-01-09 09:00:00", None).is_active(today));
        assert!(!visitor("2024-01-10 09:00:00", Some("2024-01-10 11:30:00")).is_active(today));
    }

    #[test]
    fn checked_out_is_never_active_again() {
        let v = visitor("2024-01-10 09:00:00", Some("2024-01-10 17:00:00"));
        for day in 9..12 {
            let d = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            assert!(!v.is_active(d));
        }
    }
}
