use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::AssignmentStatus;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    #[sqlx(rename = "id_estudiante")]
    pub id: i32,
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
    #[sqlx(rename = "id_facultad")]
    pub faculty_id: i32,
    #[sqlx(rename = "facultad")]
    pub faculty: Option<String>,
    #[sqlx(rename = "semestre")]
    pub semester: i32,
    #[sqlx(rename = "estado")]
    pub active: bool,
}

/// Per-variable training summary for one student
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentProgress {
    #[sqlx(rename = "id_variable")]
    pub variable_id: i32,
    #[sqlx(rename = "variable")]
    pub variable: String,
    #[sqlx(rename = "sesiones_planificadas")]
    pub planned_sessions: i32,
    #[sqlx(rename = "sesiones_completadas")]
    pub completed_sessions: i32,
    #[sqlx(rename = "sesiones_abandonadas")]
    pub abandoned_sessions: i32,
    #[sqlx(rename = "puntaje_promedio")]
    pub average_score: Option<f64>,
    #[sqlx(rename = "estado", try_from = "String")]
    pub status: AssignmentStatus,
}

/// Writable student fields, shared by create and update
#[derive(Debug, Clone, Deserialize)]
pub struct StudentInput {
    pub first_names: String,
    pub last_names: String,
    pub national_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub faculty_id: i32,
    pub semester: i32,
}
