use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trainer {
    #[sqlx(rename = "id_entrenador")]
    pub id: i32,
    #[sqlx(rename = "id_usuario")]
    pub user_id: i32,
    #[sqlx(rename = "nombres")]
    pub first_names: String,
    #[sqlx(rename = "apellidos")]
    pub last_names: String,
    #[sqlx(rename = "cedula")]
    pub national_id: String,
    #[sqlx(rename = "correo")]
    pub email: String,
    #[sqlx(rename = "telefono")]
    pub phone: Option<String>,
    #[sqlx(rename = "especialidad")]
    pub specialty: Option<String>,
    #[sqlx(rename = "estado")]
    pub active: bool,
}

/// Writable trainer fields, shared by create and update
#[derive(Debug, Clone, Deserialize)]
pub struct TrainerInput {
    pub first_names: String,
    pub last_names: String,
    pub national_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}
