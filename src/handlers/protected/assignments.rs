// handlers/protected/assignments.rs - /api/assignments/:id[/...]
//
// Admins act on any assignment, trainers only on their own.

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::{Assignment, Session};
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidJson};
use crate::services::training_service::{AbandonRequest, ModifyTrainingRequest};
use crate::services::{Mutation, TrainingService};

/// GET /api/assignments/:id
pub async fn assignment_get(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Assignment> {
    Ok(ApiResponse::success(TrainingService::new(pool).get(&user, id).await?))
}

/// GET /api/assignments/:id/sessions - ordered by session number
pub async fn assignment_sessions_get(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Vec<Session>> {
    Ok(ApiResponse::success(TrainingService::new(pool).sessions(&user, id).await?))
}

/// PUT /api/assignments/:id/training - change trainer, planned sessions or end date
pub async fn training_put(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<ModifyTrainingRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(TrainingService::new(pool).modify(&user, id, &request).await?))
}

/// POST /api/assignments/:id/finish
pub async fn finish_post(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(TrainingService::new(pool).finish(&user, id).await?))
}

/// POST /api/assignments/:id/abandon
pub async fn abandon_post(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<AbandonRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(TrainingService::new(pool).abandon(&user, id, &request).await?))
}
