use serde::Serialize;
use sqlx::FromRow;

/// A trainable cognitive skill, e.g. "Atención Sostenida"
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CognitiveVariable {
    #[sqlx(rename = "id_variable")]
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "descripcion")]
    pub description: Option<String>,
    #[sqlx(rename = "estado")]
    pub active: bool,
}
