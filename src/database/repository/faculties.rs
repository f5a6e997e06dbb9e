use sqlx::PgPool;

use super::{created_or_empty, ViewRepository};
use crate::database::manager::DatabaseError;
use crate::database::models::{CreatedRow, Faculty};

pub struct FacultyRepository {
    view: ViewRepository<Faculty>,
}

impl FacultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_facultades", "id_facultad", pool),
        }
    }

    pub async fn select_all(&self) -> Result<Vec<Faculty>, DatabaseError> {
        self.view.select_all("nombre").await
    }

    pub async fn select_404(&self, id: i32) -> Result<Faculty, DatabaseError> {
        self.view.select_404(id, "Faculty").await
    }

    pub async fn create(&self, name: &str, acronym: Option<&str>) -> Result<CreatedRow, DatabaseError> {
        let row = sqlx::query_as::<_, CreatedRow>("SELECT mensaje, id FROM facultad_crear_uft($1, $2)")
            .bind(name)
            .bind(acronym)
            .fetch_optional(self.view.pool())
            .await?;
        Ok(created_or_empty(row))
    }

    pub async fn update(&self, id: i32, name: &str, acronym: Option<&str>) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT facultad_actualizar_ufs($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(acronym)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT facultad_cambiar_estado_ufs($1, $2)")
            .bind(id)
            .bind(active)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }
}
