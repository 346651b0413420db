pub mod auth;
pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod dashboard;
pub mod log;
pub mod report;
pub mod trend;
pub mod user;
pub mod visitor;
