//! Check-in: validate the form fields and insert a new visitor record.

use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_visitor;
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::models::visitor::Visitor;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

pub struct CheckinLogic;

impl CheckinLogic {
    /// Insert a new visitor. Required text fields must be non-empty;
    /// time-in defaults to the current instant when not supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        name: &str,
        gender: Gender,
        client_type: ClientType,
        office: &str,
        purpose: &str,
        time_in: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> AppResult<Visitor> {
        let name = name.trim();
        let office = office.trim();
        let purpose = purpose.trim();

        if name.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if office.is_empty() {
            return Err(AppError::MissingField("office"));
        }
        if purpose.is_empty() {
            return Err(AppError::MissingField("purpose"));
        }

        let mut visitor = Visitor::new(
            0,
            name.to_string(),
            gender,
            client_type,
            office.to_string(),
            purpose.to_string(),
            time_in.unwrap_or(now),
        );

        visitor.id = insert_visitor(&pool.conn, &visitor)?;

        let _ = vlog(
            &pool.conn,
            "checkin",
            &visitor.id.to_string(),
            &format!("Visitor '{}' checked in at {}", visitor.name, visitor.time_in_str()),
        );

        success(format!(
            "Visitor '{}' has been successfully checked in! Time: {}",
            visitor.name,
            visitor.time_in.format("%I:%M %p")
        ));

        Ok(visitor)
    }
}
