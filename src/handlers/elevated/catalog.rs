// handlers/elevated/catalog.rs - Faculty and cognitive variable maintenance

use axum::Extension;
use sqlx::PgPool;

use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, ValidJson};
use crate::services::faculty_service::{FacultyRequest, StatusRequest};
use crate::services::variable_service::VariableRequest;
use crate::services::{FacultyService, Mutation, VariableService};

/// POST /api/admin/faculties
pub async fn faculty_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(request): ValidJson<FacultyRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::created(FacultyService::new(pool).create(&request).await?))
}

/// PUT /api/admin/faculties/:id
pub async fn faculty_put(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<FacultyRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(FacultyService::new(pool).update(id, &request).await?))
}

/// PATCH /api/admin/faculties/:id/status
pub async fn faculty_status_patch(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<StatusRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(
        FacultyService::new(pool).set_active(id, request.active).await?,
    ))
}

/// POST /api/admin/variables
pub async fn variable_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(request): ValidJson<VariableRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::created(VariableService::new(pool).create(&request).await?))
}

/// PUT /api/admin/variables/:id
pub async fn variable_put(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
    ValidJson(request): ValidJson<VariableRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::success(VariableService::new(pool).update(id, &request).await?))
}
