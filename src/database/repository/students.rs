use sqlx::PgPool;

use super::{created_or_empty, ViewRepository};
use crate::database::manager::DatabaseError;
use crate::database::models::{CreatedRow, Student, StudentInput, StudentProgress};

pub struct StudentRepository {
    view: ViewRepository<Student>,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_estudiantes", "id_estudiante", pool),
        }
    }

    pub async fn select_any(
        &self,
        faculty_id: Option<i32>,
        active: Option<bool>,
    ) -> Result<Vec<Student>, DatabaseError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT * FROM vw_estudiantes
             WHERE ($1::int IS NULL OR id_facultad = $1)
               AND ($2::bool IS NULL OR estado = $2)
             ORDER BY apellidos, nombres",
        )
        .bind(faculty_id)
        .bind(active)
        .fetch_all(self.view.pool())
        .await?;
        Ok(rows)
    }

    pub async fn select_404(&self, id: i32) -> Result<Student, DatabaseError> {
        self.view.select_404(id, "Student").await
    }

    pub async fn create(&self, input: &StudentInput) -> Result<CreatedRow, DatabaseError> {
        let row = sqlx::query_as::<_, CreatedRow>(
            "SELECT mensaje, id FROM estudiante_crear_uft($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.national_id)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(input.faculty_id)
        .bind(input.semester)
        .fetch_optional(self.view.pool())
        .await?;
        Ok(created_or_empty(row))
    }

    pub async fn update(&self, id: i32, input: &StudentInput) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>(
            "SELECT estudiante_actualizar_ufs($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.national_id)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(input.faculty_id)
        .bind(input.semester)
        .fetch_one(self.view.pool())
        .await?;
        Ok(message)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT estudiante_cambiar_estado_ufs($1, $2)")
            .bind(id)
            .bind(active)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }

    pub async fn progress(&self, id: i32) -> Result<Vec<StudentProgress>, DatabaseError> {
        let rows = sqlx::query_as::<_, StudentProgress>(
            "SELECT id_variable, variable, sesiones_planificadas, sesiones_completadas,
                    sesiones_abandonadas, puntaje_promedio::float8 AS puntaje_promedio, estado
             FROM estudiante_progreso_uft($1)",
        )
        .bind(id)
        .fetch_all(self.view.pool())
        .await?;
        Ok(rows)
    }
}
