// handlers/public/auth.rs - POST /api/auth/login handler

use axum::Extension;
use sqlx::PgPool;

use crate::middleware::{ApiResponse, ApiResult, ValidJson};
use crate::services::auth_service::{LoginRequest, LoginResponse};
use crate::services::AuthService;

/**
 * POST /api/auth/login - Authenticate and receive a JWT
 *
 * Input: `{ "email": "string", "password": "string" }`
 *
 * Output:
 * ```json
 * {
 *   "success": true,
 *   "data": {
 *     "token": "eyJhbGciOiJIUzI1NiI...",
 *     "expires_in": 604800,
 *     "user": { "id": 1, "name": "...", "email": "...", "role": "admin" }
 *   }
 * }
 * ```
 *
 * Wrong credentials answer 401 without telling which part was wrong.
 */
pub async fn login_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let response = AuthService::new(pool).login(&request).await?;
    Ok(ApiResponse::success(response))
}
