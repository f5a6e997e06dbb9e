// handlers/elevated/trainers.rs - /api/admin/trainers[/:id[/status|/students]]

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::{Student, Trainer, TrainerInput};
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidQuery};
use crate::services::faculty_service::StatusRequest;
use crate::services::trainer_service::{CreateTrainerRequest, TrainerQuery};
use crate::services::{Mutation, TrainerService};

/// GET /api/admin/trainers?active=
pub async fn trainers_get(
    Extension(pool): Extension<PgPool>,
    ValidQuery(query): ValidQuery<TrainerQuery>,
) -> ApiResult<Vec<Trainer>> {
    Ok(ApiResponse::success(TrainerService::new(pool).list(&query).await?))
}

/// GET /api/admin/trainers/:id
pub async fn trainer_get(Extension(pool): Extension<PgPool>, RecordId(id): RecordId) -> ApiResult<Trainer> {
    Ok(ApiResponse::success(TrainerService::new(pool).get(id).await?))
}

/// POST /api/admin/trainers - creates the login account and the profile
pub async fn trainer_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(request): ValidJson<CreateTrainerRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::created(TrainerService::new(pool).create(&request).await?))
}

/// PUT /api/admin/trainers/:id
pub async fn trainer_put(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<TrainerInput>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(TrainerService::new(pool).update(id, &input).await?))
}

/// PATCH /api/admin/trainers/:id/status
pub async fn trainer_status_patch(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<StatusRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(
        TrainerService::new(pool).set_active(id, request.active).await?,
    ))
}

/// GET /api/admin/trainers/:id/students
pub async fn trainer_students_get(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
) -> ApiResult<Vec<Student>> {
    Ok(ApiResponse::success(TrainerService::new(pool).students(id).await?))
}
