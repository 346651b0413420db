pub mod client_type;
pub mod gender;
pub mod role;
pub mod session;
pub mod user;
pub mod visitor;
