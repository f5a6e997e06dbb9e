// handlers/protected/trainer.rs - /api/trainer/* views of the calling trainer
//
// Mounted behind require_trainer, so trainer_id is always present here.

use axum::Extension;
use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::{Assignment, AssignmentStatus, Student};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidQuery};
use crate::services::{TrainerService, TrainingService};

#[derive(Debug, Deserialize)]
pub struct OwnAssignmentsQuery {
    pub status: Option<AssignmentStatus>,
}

/// GET /api/trainer/students - students with at least one assignment for the caller
pub async fn students_get(Extension(pool): Extension<PgPool>, user: AuthUser) -> ApiResult<Vec<Student>> {
    let trainer_id = user
        .trainer_id
        .ok_or_else(|| ApiError::forbidden("No trainer profile linked to this account"))?;
    Ok(ApiResponse::success(TrainerService::new(pool).students(trainer_id).await?))
}

/// GET /api/trainer/assignments?status=
pub async fn assignments_get(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    ValidQuery(query): ValidQuery<OwnAssignmentsQuery>,
) -> ApiResult<Vec<Assignment>> {
    let assignments = TrainingService::new(pool).list_own(&user, query.status).await?;
    Ok(ApiResponse::success(assignments))
}
