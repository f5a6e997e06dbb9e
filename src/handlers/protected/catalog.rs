// handlers/protected/catalog.rs - Read access to faculties and cognitive variables

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::{CognitiveVariable, Faculty};
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{FacultyService, VariableService};

/// GET /api/faculties
pub async fn faculties_get(Extension(pool): Extension<PgPool>) -> ApiResult<Vec<Faculty>> {
    Ok(ApiResponse::success(FacultyService::new(pool).list().await?))
}

/// GET /api/faculties/:id
pub async fn faculty_get(Extension(pool): Extension<PgPool>, RecordId(id): RecordId) -> ApiResult<Faculty> {
    Ok(ApiResponse::success(FacultyService::new(pool).get(id).await?))
}

/// GET /api/variables
pub async fn variables_get(Extension(pool): Extension<PgPool>) -> ApiResult<Vec<CognitiveVariable>> {
    Ok(ApiResponse::success(VariableService::new(pool).list().await?))
}

/// GET /api/variables/:id
pub async fn variable_get(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
) -> ApiResult<CognitiveVariable> {
    Ok(ApiResponse::success(VariableService::new(pool).get(id).await?))
}
