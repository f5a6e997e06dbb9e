pub mod auth;
pub mod response;
pub mod role;
pub mod validate;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
pub use role::{require_admin, require_trainer};
pub use validate::{Validate, ValidJson, ValidQuery, Validator};
