use axum::{extract::Request, middleware::Next, response::Response};

use super::auth::AuthUser;
use crate::auth::Role;
use crate::error::ApiError;

/// Role gate for /api/admin/* routes. Must run after `jwt_auth_middleware`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    gate(Role::Admin, request, next).await
}

/// Role gate for /api/trainer/* routes. Trainers must also carry a trainer id.
pub async fn require_trainer(request: Request, next: Next) -> Result<Response, ApiError> {
    gate(Role::Trainer, request, next).await
}

async fn gate(required: Role, request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    if user.role != required {
        tracing::warn!(
            "Role check failed for {}: '{}' required, caller has '{}'",
            user.email,
            required,
            user.role
        );
        return Err(ApiError::forbidden(format!(
            "Role '{}' required, caller has '{}'",
            required, user.role
        )));
    }

    if required == Role::Trainer && user.trainer_id.is_none() {
        tracing::warn!("Trainer account {} has no trainer profile", user.email);
        return Err(ApiError::forbidden("Trainer profile not found for this account"));
    }

    Ok(next.run(request).await)
}
