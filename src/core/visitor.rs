//! Admin maintenance of visitor records: edit any column, hard delete.

use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_visitor, load_visitor, update_visitor};
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::models::visitor::Visitor;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

/// Field-by-field edit form; unset fields keep their current value.
/// No column is immutable: edits may rewrite time-in and time-out too.
#[derive(Debug, Default)]
pub struct VisitorEdit {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub client_type: Option<ClientType>,
    pub office: Option<String>,
    pub purpose: Option<String>,
    pub time_in: Option<NaiveDateTime>,
    pub time_out: Option<NaiveDateTime>,
    /// Re-open the visit by clearing time-out.
    pub clear_time_out: bool,
}

pub struct VisitorLogic;

impl VisitorLogic {
    pub fn edit(pool: &mut DbPool, id: i64, edit: VisitorEdit) -> AppResult<Visitor> {
        let mut v = load_visitor(&pool.conn, id)?;

        if let Some(name) = edit.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::MissingField("name"));
            }
            v.name = name;
        }
        if let Some(g) = edit.gender {
            v.gender = g;
        }
        if let Some(ct) = edit.client_type {
            v.client_type = ct;
        }
        if let Some(office) = edit.office {
            let office = office.trim().to_string();
            if office.is_empty() {
                return Err(AppError::MissingField("office"));
            }
            v.office = office;
        }
        if let Some(purpose) = edit.purpose {
            let purpose = purpose.trim().to_string();
            if purpose.is_empty() {
                return Err(AppError::MissingField("purpose"));
            }
            v.purpose = purpose;
        }
        if let Some(t_in) = edit.time_in {
            v.time_in = t_in;
        }
        if edit.clear_time_out {
            v.time_out = None;
        } else if let Some(t_out) = edit.time_out {
            v.time_out = Some(t_out);
        }

        // Time-out must stay after time-in whenever both are set.
        if let Some(t_out) = v.time_out {
            if t_out <= v.time_in {
                return Err(AppError::CheckoutBeforeTimeIn(t_out.to_string()));
            }
        }

        update_visitor(&pool.conn, &v)?;

        let _ = vlog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("Visitor '{}' updated", v.name),
        );

        success(format!("Visitor '{}' updated successfully.", v.name));
        Ok(v)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        // Load first so the log line can carry the name.
        let v = load_visitor(&pool.conn, id)?;

        let deleted = delete_visitor(&pool.conn, id)?;
        if deleted == 0 {
            return Err(AppError::VisitorNotFound(id));
        }

        let _ = vlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Visitor '{}' deleted", v.name),
        );

        success("Visitor record deleted successfully.");
        Ok(())
    }
}
