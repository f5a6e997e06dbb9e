// handlers/protected/auth.rs - /api/auth/* for authenticated users

use axum::Extension;
use sqlx::PgPool;

use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::services::auth_service::{ChangePasswordRequest, UserInfo};
use crate::services::{AuthService, Mutation};

/// GET /api/auth/me - identity carried by the token
pub async fn me_get(user: AuthUser) -> ApiResult<UserInfo> {
    Ok(ApiResponse::success(UserInfo::from(&user)))
}

/// PUT /api/auth/password - change the caller's own password
pub async fn password_put(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    ValidJson(request): ValidJson<ChangePasswordRequest>,
) -> ApiResult<Mutation> {
    let mutation = AuthService::new(pool).change_password(&user, &request).await?;
    Ok(ApiResponse::success(mutation))
}
