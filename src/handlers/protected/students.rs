// handlers/protected/students.rs - GET /api/students[/:id[/assignments|/progress]]

use axum::Extension;
use sqlx::PgPool;

use crate::database::models::{Assignment, Student, StudentProgress};
use crate::handlers::RecordId;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, ValidQuery};
use crate::services::student_service::StudentQuery;
use crate::services::StudentService;

/// GET /api/students?faculty_id=&active=
pub async fn students_get(
    Extension(pool): Extension<PgPool>,
    ValidQuery(query): ValidQuery<StudentQuery>,
) -> ApiResult<Vec<Student>> {
    Ok(ApiResponse::success(StudentService::new(pool).list(&query).await?))
}

/// GET /api/students/:id
pub async fn student_get(Extension(pool): Extension<PgPool>, RecordId(id): RecordId) -> ApiResult<Student> {
    Ok(ApiResponse::success(StudentService::new(pool).get(id).await?))
}

/// GET /api/students/:id/assignments
pub async fn student_assignments_get(
    Extension(pool): Extension<PgPool>,
    user: AuthUser,
    RecordId(id): RecordId,
) -> ApiResult<Vec<Assignment>> {
    Ok(ApiResponse::success(StudentService::new(pool).assignments(&user, id).await?))
}

/// GET /api/students/:id/progress - per-variable summary
pub async fn student_progress_get(
    Extension(pool): Extension<PgPool>,
    RecordId(id): RecordId,
) -> ApiResult<Vec<StudentProgress>> {
    Ok(ApiResponse::success(StudentService::new(pool).progress(id).await?))
}
