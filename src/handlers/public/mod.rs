// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: None

pub mod auth;
pub mod root;

pub use auth::login_post;
pub use root::{health_get, root_get};
