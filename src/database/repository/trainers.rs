use sqlx::PgPool;

use super::{created_or_empty, ViewRepository};
use crate::database::manager::DatabaseError;
use crate::database::models::{CreatedRow, Student, Trainer, TrainerInput};

pub struct TrainerRepository {
    view: ViewRepository<Trainer>,
}

impl TrainerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_entrenadores", "id_entrenador", pool),
        }
    }

    pub async fn select_any(&self, active: Option<bool>) -> Result<Vec<Trainer>, DatabaseError> {
        let rows = sqlx::query_as::<_, Trainer>(
            "SELECT * FROM vw_entrenadores
             WHERE ($1::bool IS NULL OR estado = $1)
             ORDER BY apellidos, nombres",
        )
        .bind(active)
        .fetch_all(self.view.pool())
        .await?;
        Ok(rows)
    }

    pub async fn select_404(&self, id: i32) -> Result<Trainer, DatabaseError> {
        self.view.select_404(id, "Trainer").await
    }

    /// Creates the user account and the trainer profile in one call
    pub async fn create(&self, input: &TrainerInput, password: &str) -> Result<CreatedRow, DatabaseError> {
        let row = sqlx::query_as::<_, CreatedRow>(
            "SELECT mensaje, id FROM entrenador_crear_uft($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.national_id)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.specialty)
        .bind(password)
        .fetch_optional(self.view.pool())
        .await?;
        Ok(created_or_empty(row))
    }

    pub async fn update(&self, id: i32, input: &TrainerInput) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>(
            "SELECT entrenador_actualizar_ufs($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&input.first_names)
        .bind(&input.last_names)
        .bind(&input.national_id)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.specialty)
        .fetch_one(self.view.pool())
        .await?;
        Ok(message)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT entrenador_cambiar_estado_ufs($1, $2)")
            .bind(id)
            .bind(active)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }

    pub async fn students(&self, trainer_id: i32) -> Result<Vec<Student>, DatabaseError> {
        let rows = sqlx::query_as::<_, Student>("SELECT * FROM entrenador_estudiantes_uft($1)")
            .bind(trainer_id)
            .fetch_all(self.view.pool())
            .await?;
        Ok(rows)
    }
}
