use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::LoginRow;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Credentials are verified inside the database; no row means no match
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<LoginRow>, DatabaseError> {
        let row = sqlx::query_as::<_, LoginRow>(
            "SELECT id_usuario, id_entrenador, nombre, correo, rol FROM usuario_login_uft($1, $2)",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn change_password(
        &self,
        user_id: i32,
        current: &str,
        new: &str,
    ) -> Result<Option<String>, DatabaseError> {
        let message = sqlx::query_scalar::<_, Option<String>>("SELECT usuario_cambiar_contrasena_ufs($1, $2, $3)")
            .bind(user_id)
            .bind(current)
            .bind(new)
            .fetch_one(&self.pool)
            .await?;
        Ok(message)
    }
}
