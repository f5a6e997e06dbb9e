// handlers/mod.rs - Three-tier handler layout
//
// Public (no auth) → Protected (JWT auth) → Elevated (admin JWT)

pub mod elevated; // /api/admin/*, admin role required
pub mod protected; // /api/*, any authenticated user
pub mod public; // /, /health, /api/auth/login

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;

/// Integer `:id` path segment. Non-numeric ids answer 400 in the JSON envelope.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("Path id must be an integer"))?;
        Ok(RecordId(id))
    }
}
