use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Faculty {
    #[sqlx(rename = "id_facultad")]
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "siglas")]
    pub acronym: Option<String>,
    #[sqlx(rename = "estado")]
    pub active: bool,
}
