use crate::models::user::User;
use crate::models::visitor::Visitor;
use serde::Serialize;

/// Flat row mirroring the visitor grid, one per export line.
#[derive(Serialize, Clone, Debug)]
pub struct VisitorExport {
    pub id: i64,
    pub date: String,
    pub name: String,
    pub gender: String,
    pub client_type: String,
    pub office: String,
    pub purpose: String,
    pub time_in: String,
    pub time_out: String,
}

impl From<&Visitor> for VisitorExport {
    fn from(v: &Visitor) -> Self {
        Self {
            id: v.id,
            date: v.time_in.format("%Y-%m-%d").to_string(),
            name: v.name.clone(),
            gender: v.gender.to_db_str().to_string(),
            client_type: v.client_type.to_db_str().to_string(),
            office: v.office.clone(),
            purpose: v.purpose.clone(),
            time_in: v.time_in.format("%H:%M:%S").to_string(),
            time_out: v
                .time_out
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

pub(crate) fn visitor_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "name",
        "gender",
        "client_type",
        "office",
        "purpose",
        "time_in",
        "time_out",
    ]
}

pub(crate) fn visitor_to_row(v: &VisitorExport) -> Vec<String> {
    vec![
        v.id.to_string(),
        v.date.clone(),
        v.name.clone(),
        v.gender.clone(),
        v.client_type.clone(),
        v.office.clone(),
        v.purpose.clone(),
        v.time_in.clone(),
        v.time_out.clone(),
    ]
}

/// Flat row mirroring the user-management grid. Password hashes are
/// never exported.
#[derive(Serialize, Clone, Debug)]
pub struct UserExport {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserExport {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            full_name: u.full_name.clone(),
            role: u.role.to_db_str().to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: u.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub(crate) fn user_headers() -> Vec<&'static str> {
    vec!["id", "username", "full_name", "role", "created_at", "updated_at"]
}

pub(crate) fn user_to_row(u: &UserExport) -> Vec<String> {
    vec![
        u.id.to_string(),
        u.username.clone(),
        u.full_name.clone(),
        u.role.clone(),
        u.created_at.clone(),
        u.updated_at.clone(),
    ]
}

pub(crate) fn report_headers(kind_label: &'static str) -> Vec<&'static str> {
    vec![kind_label, "total", "completed", "active"]
}

pub(crate) fn report_to_row(r: &crate::core::report::ReportRow) -> Vec<String> {
    vec![
        r.category.clone(),
        r.total.to_string(),
        r.completed.to_string(),
        r.active.to_string(),
    ]
}
