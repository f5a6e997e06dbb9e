use sqlx::FromRow;

/// Row returned by `usuario_login_uft` when the credentials match
#[derive(Debug, Clone, FromRow)]
pub struct LoginRow {
    #[sqlx(rename = "id_usuario")]
    pub user_id: i32,
    #[sqlx(rename = "id_entrenador")]
    pub trainer_id: Option<i32>,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "correo")]
    pub email: String,
    #[sqlx(rename = "rol")]
    pub role: String,
}
