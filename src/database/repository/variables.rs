use sqlx::PgPool;

use super::{created_or_empty, ViewRepository};
use crate::database::manager::DatabaseError;
use crate::database::models::{CognitiveVariable, CreatedRow};

pub struct VariableRepository {
    view: ViewRepository<CognitiveVariable>,
}

impl VariableRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_variables_cognitivas", "id_variable", pool),
        }
    }

    pub async fn select_all(&self) -> Result<Vec<CognitiveVariable>, DatabaseError> {
        self.view.select_all("nombre").await
    }

    pub async fn select_404(&self, id: i32) -> Result<CognitiveVariable, DatabaseError> {
        self.view.select_404(id, "Cognitive variable").await
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<CreatedRow, DatabaseError> {
        let row = sqlx::query_as::<_, CreatedRow>("SELECT mensaje, id FROM variable_crear_uft($1, $2)")
            .bind(name)
            .bind(description)
            .fetch_optional(self.view.pool())
            .await?;
        Ok(created_or_empty(row))
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT variable_actualizar_ufs($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }
}
