use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UnknownStatus;

/// Lifecycle of a training session.
///
/// ```text
/// Por Iniciar --start--> En Progreso --finish--> Finalizado
///      |                      |
///      +------abandon---------+------abandon---> Abandono
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[serde(rename = "Por Iniciar")]
    Pending,
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Finalizado")]
    Finished,
    #[serde(rename = "Abandono")]
    Abandoned,
}

/// Workflow actions on a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Finish,
    Abandon,
}

impl SessionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Start => "start",
            SessionAction::Finish => "finish",
            SessionAction::Abandon => "abandon",
        }
    }
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "Por Iniciar",
            SessionStatus::InProgress => "En Progreso",
            SessionStatus::Finished => "Finalizado",
            SessionStatus::Abandoned => "Abandono",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Finished | SessionStatus::Abandoned)
    }

    /// Status reached by applying `action`, or None when the move is not allowed
    pub fn apply(&self, action: SessionAction) -> Option<SessionStatus> {
        match (self, action) {
            (SessionStatus::Pending, SessionAction::Start) => Some(SessionStatus::InProgress),
            (SessionStatus::InProgress, SessionAction::Finish) => Some(SessionStatus::Finished),
            (SessionStatus::Pending | SessionStatus::InProgress, SessionAction::Abandon) => {
                Some(SessionStatus::Abandoned)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SessionStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "por iniciar" => Ok(SessionStatus::Pending),
            "en progreso" => Ok(SessionStatus::InProgress),
            "finalizado" | "finalizada" => Ok(SessionStatus::Finished),
            "abandono" | "abandonado" | "abandonada" => Ok(SessionStatus::Abandoned),
            _ => Err(UnknownStatus(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
    #[sqlx(rename = "id_sesion")]
    pub id: i32,
    #[sqlx(rename = "id_asignacion")]
    pub assignment_id: i32,
    #[sqlx(rename = "numero_sesion")]
    pub number: i32,
    #[sqlx(rename = "fecha_programada")]
    pub scheduled_date: Option<NaiveDate>,
    #[sqlx(rename = "fecha_inicio")]
    pub started_at: Option<NaiveDateTime>,
    #[sqlx(rename = "fecha_fin")]
    pub finished_at: Option<NaiveDateTime>,
    #[sqlx(rename = "puntaje")]
    pub score: Option<f64>,
    #[sqlx(rename = "observaciones")]
    pub observations: Option<String>,
    #[sqlx(rename = "id_entrenador")]
    pub trainer_id: i32,
    #[sqlx(rename = "estado", try_from = "String")]
    pub status: SessionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let started = SessionStatus::Pending.apply(SessionAction::Start).unwrap();
        assert_eq!(started, SessionStatus::InProgress);
        assert_eq!(started.apply(SessionAction::Finish), Some(SessionStatus::Finished));
    }

    #[test]
    fn cannot_finish_before_starting() {
        assert_eq!(SessionStatus::Pending.apply(SessionAction::Finish), None);
    }

    #[test]
    fn abandon_from_any_open_state() {
        assert_eq!(
            SessionStatus::Pending.apply(SessionAction::Abandon),
            Some(SessionStatus::Abandoned)
        );
        assert_eq!(
            SessionStatus::InProgress.apply(SessionAction::Abandon),
            Some(SessionStatus::Abandoned)
        );
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for status in [SessionStatus::Finished, SessionStatus::Abandoned] {
            assert!(status.is_terminal());
            for action in [SessionAction::Start, SessionAction::Finish, SessionAction::Abandon] {
                assert_eq!(status.apply(action), None);
            }
        }
    }

    #[test]
    fn parses_database_values() {
        assert_eq!(
            SessionStatus::try_from("En Progreso".to_string()).unwrap(),
            SessionStatus::InProgress
        );
        assert_eq!(
            SessionStatus::try_from(" POR INICIAR ".to_string()).unwrap(),
            SessionStatus::Pending
        );
        assert!(SessionStatus::try_from("Pausada".to_string()).is_err());
        assert_eq!(serde_json::to_value(SessionStatus::Abandoned).unwrap(), "Abandono");
    }
}
