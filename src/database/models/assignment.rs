use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UnknownStatus;

/// Lifecycle of a variable assignment: En Progreso -> Finalizado | Abandono
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Finalizado")]
    Finished,
    #[serde(rename = "Abandono")]
    Abandoned,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::InProgress => "En Progreso",
            AssignmentStatus::Finished => "Finalizado",
            AssignmentStatus::Abandoned => "Abandono",
        }
    }

    /// Only an assignment in progress can be modified, finished or abandoned
    pub fn is_open(&self) -> bool {
        matches!(self, AssignmentStatus::InProgress)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AssignmentStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "en progreso" => Ok(AssignmentStatus::InProgress),
            "finalizado" | "finalizada" => Ok(AssignmentStatus::Finished),
            "abandono" | "abandonado" | "abandonada" => Ok(AssignmentStatus::Abandoned),
            _ => Err(UnknownStatus(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assignment {
    #[sqlx(rename = "id_asignacion")]
    pub id: i32,
    #[sqlx(rename = "id_estudiante")]
    pub student_id: i32,
    #[sqlx(rename = "estudiante")]
    pub student: String,
    #[sqlx(rename = "id_entrenador")]
    pub trainer_id: i32,
    #[sqlx(rename = "entrenador")]
    pub trainer: String,
    #[sqlx(rename = "id_variable")]
    pub variable_id: i32,
    #[sqlx(rename = "variable")]
    pub variable: String,
    #[sqlx(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[sqlx(rename = "fecha_fin")]
    pub end_date: Option<NaiveDate>,
    #[sqlx(rename = "sesiones_planificadas")]
    pub planned_sessions: i32,
    #[sqlx(rename = "sesiones_completadas")]
    pub completed_sessions: i32,
    #[sqlx(rename = "estado", try_from = "String")]
    pub status: AssignmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_in_progress_is_open() {
        assert!(AssignmentStatus::InProgress.is_open());
        assert!(!AssignmentStatus::Finished.is_open());
        assert!(!AssignmentStatus::Abandoned.is_open());
    }

    #[test]
    fn status_filter_values_deserialize() {
        let status: AssignmentStatus = serde_json::from_str("\"Finalizado\"").unwrap();
        assert_eq!(status, AssignmentStatus::Finished);
        assert_eq!(
            AssignmentStatus::try_from("abandonada".to_string()).unwrap(),
            AssignmentStatus::Abandoned
        );
    }
}
