pub mod manager;
pub mod models;
pub mod outcome;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use outcome::{classify, Outcome};
