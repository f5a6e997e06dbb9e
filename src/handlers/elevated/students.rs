// handlers/elevated/students.rs - Student registration and maintenance

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::StudentInput;
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, ValidJson};
use crate::services::faculty_service::StatusRequest;
use crate::services::{Mutation, StudentService};

/// POST /api/admin/students - 201 with the new student id
pub async fn student_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(input): ValidJson<StudentInput>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::created(StudentService::new(pool).create(&input).await?))
}

/// PUT /api/admin/students/:id
pub async fn student_put(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<StudentInput>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(StudentService::new(pool).update(id, &input).await?))
}

/// PATCH /api/admin/students/:id/status
pub async fn student_status_patch(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<StatusRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(
        StudentService::new(pool).set_active(id, request.active).await?,
    ))
}
