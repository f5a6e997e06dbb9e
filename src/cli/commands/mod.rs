pub mod assignments;
pub mod auth;
pub mod server;
pub mod sessions;
pub mod students;
