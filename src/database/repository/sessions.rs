use sqlx::PgPool;

use super::ViewRepository;
use crate::database::manager::DatabaseError;
use crate::database::models::Session;

const SESSION_COLUMNS: &str = "id_sesion, id_asignacion, numero_sesion, fecha_programada, fecha_inicio, \
     fecha_fin, puntaje::float8 AS puntaje, observaciones, id_entrenador, estado";

pub struct SessionRepository {
    view: ViewRepository<Session>,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            view: ViewRepository::new("vw_sesiones", "id_sesion", pool),
        }
    }

    pub async fn select_one(&self, id: i32) -> Result<Option<Session>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} WHERE id_sesion = $1", SESSION_COLUMNS, self.view.view());
        let row = sqlx::query_as::<_, Session>(&sql)
            .bind(id)
            .fetch_optional(self.view.pool())
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i32) -> Result<Session, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Session {} not found", id)))
    }

    pub async fn select_by_assignment(&self, assignment_id: i32) -> Result<Vec<Session>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id_asignacion = $1 ORDER BY numero_sesion",
            SESSION_COLUMNS,
            self.view.view()
        );
        let rows = sqlx::query_as::<_, Session>(&sql)
            .bind(assignment_id)
            .fetch_all(self.view.pool())
            .await?;
        Ok(rows)
    }

    pub async fn start(&self, id: i32, actor_trainer_id: Option<i32>) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT sesion_iniciar_ufs($1, $2)")
            .bind(id)
            .bind(actor_trainer_id)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }

    pub async fn finish(
        &self,
        id: i32,
        actor_trainer_id: Option<i32>,
        score: f64,
        observations: Option<&str>,
    ) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT sesion_finalizar_ufs($1, $2, $3, $4)")
            .bind(id)
            .bind(actor_trainer_id)
            .bind(score)
            .bind(observations)
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
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT sesion_abandonar_ufs($1, $2, $3)")
            .bind(id)
            .bind(actor_trainer_id)
            .bind(reason)
            .fetch_one(self.view.pool())
            .await?;
        Ok(message)
    }
}
