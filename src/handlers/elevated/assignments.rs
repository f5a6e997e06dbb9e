// handlers/elevated/assignments.rs - Assignment listing and creation

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::Assignment;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidQuery};
use crate::services::training_service::{AssignTrainingRequest, AssignmentQuery};
use crate::services::{Mutation, TrainingService};

/// GET /api/admin/assignments?status=&trainer_id=&student_id=
pub async fn assignments_get(
    Extension(pool): Extension<PgPool>,
    ValidQuery(query): ValidQuery<AssignmentQuery>,
) -> ApiResult<Vec<Assignment>> {
    Ok(ApiResponse::success(TrainingService::new(pool).list(&query).await?))
}

/**
 * POST /api/admin/assignments - assign a cognitive variable to a student
 *
 * Input:
 * ```json
 * {
 *   "student_id": 3,
 *   "trainer_id": 4,
 *   "variable_id": 1,
 *   "planned_sessions": 10,
 *   "start_date": "2024-04-01"
 * }
 * ```
 *
 * The database creates the planned sessions in "Por Iniciar" along with the
 * assignment. Duplicate open assignments for the same variable answer 409.
 */
pub async fn assignment_post(
    Extension(pool): Extension<PgPool>,
    ValidJson(request): ValidJson<AssignTrainingRequest>,
) -> ApiResult<Mutation> {
    Ok(ApiResponse::created(TrainingService::new(pool).assign(&request).await?))
}
