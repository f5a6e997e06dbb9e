use chrono::NaiveDate;
use sqlx::PgPool;

use super::{created_or_empty, ViewRepository};
use crate::database::manager::DatabaseError;
use crate::database::models::{Assignment, AssignmentStatus, CreatedRow};

/// Optional filters for assignment listings
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub status: Option<AssignmentStatus>,
    pub trainer_id: Option<i32>,
    pub student_id: Option<i32>,
}

pub struct AssignmentRepository {
    view: ViewRepository<Assignment>,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_asignaciones", "id_asignacion", pool),
        }
    }

    pub async fn select_any(&self, filter: AssignmentFilter) -> Result<Vec<Assignment>, DatabaseError> {
        let rows = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM vw_asignaciones
             WHERE ($1::text IS NULL OR estado = $1)
               AND ($2::int IS NULL OR id_entrenador = $2)
               AND ($3::int IS NULL OR id_estudiante = $3)
             ORDER BY fecha_inicio DESC, id_asignacion DESC",
        )
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.trainer_id)
        .bind(filter.student_id)
        .fetch_all(self.view.pool())
        .await?;
        Ok(rows)
    }

    pub async fn select_404(&self, id: i32) -> Result<Assignment, DatabaseError> {
        self.view.select_404(id, "Assignment").await
    }

    /// Creates the assignment together with its planned sessions
    pub async fn assign(
        &self,
        student_id: i32,
        trainer_id: i32,
        variable_id: i32,
        planned_sessions: i32,
        start_date: NaiveDate,
    ) -> Result<CreatedRow, DatabaseError> {
        let row = sqlx::query_as::<_, CreatedRow>(
            "SELECT mensaje, id FROM entrenamiento_asignar_uft($1, $2, $3, $4, $5)",
        )
        .bind(student_id)
        .bind(trainer_id)
        .bind(variable_id)
        .bind(planned_sessions)
        .bind(start_date)
        .fetch_optional(self.view.pool())
        .await?;
        Ok(created_or_empty(row))
    }

    pub async fn modify_training(
        &self,
        id: i32,
        actor_trainer_id: Option<i32>,
        new_trainer_id: Option<i32>,
        planned_sessions: Option<i32>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>(
            "SELECT entrenamiento_modificar_ufs($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(actor_trainer_id)
        .bind(new_trainer_id)
        .bind(planned_sessions)
        .bind(end_date)
        .fetch_one(self.view.pool())
        .await?;
        Ok(message)
    }

    pub async fn finish(&self, id: i32, actor_trainer_id: Option<i32>) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT asignacion_finalizar_ufs($1, $2)")
            .bind(id)
            .bind(actor_trainer_id)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }

    pub async fn abandon(
        &self,
        id: i32,
        actor_trainer_id: Option<i32>,
        reason: &str,
    ) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT asignacion_abandonar_ufs($1, $2, $3)")
            .bind(id)
            .bind(actor_trainer_id)
            .bind(reason)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }
}
