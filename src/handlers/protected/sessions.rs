// handlers/protected/sessions.rs - /api/sessions/:id[/start|/finish|/abandon]

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::Session;
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::services::session_service::FinishSessionRequest;
use crate::services::training_service::AbandonRequest;
use crate::services::{Mutation, SessionService};

pub async fn session_get(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Session> {
    Ok(ApiResponse::success(SessionService::new(pool).get(&user, id).await?))
}

/// POST /api/sessions/:id/start - Por Iniciar → En Progreso
pub async fn start_post(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(SessionService::new(pool).start(&user, id).await?))
}

/**
 * POST /api/sessions/:id/finish - En Progreso → Finalizado
 *
 * Input: `{ "score": 0..=100, "observations": "optional" }`
 *
 * The database updates the assignment's completed count and may close the
 * assignment when the last planned session finishes.
 */
pub async fn finish_post(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<FinishSessionRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(SessionService::new(pool).finish(&user, id, &request).await?))
}

/// POST /api/sessions/:id/abandon - from Por Iniciar or En Progreso
pub async fn abandon_post(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<AbandonRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(SessionService::new(pool).abandon(&user, id, &request).await?))
}
