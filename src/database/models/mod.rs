pub mod assignment;
pub mod faculty;
pub mod session;
pub mod student;
pub mod trainer;
pub mod user;
pub mod variable;

pub use assignment::{Assignment, AssignmentStatus};
pub use faculty::Faculty;
pub use session::{Session, SessionAction, SessionStatus};
pub use student::{Student, StudentInput, StudentProgress};
pub use trainer::{Trainer, TrainerInput};
pub use user::LoginRow;
pub use variable::CognitiveVariable;

use serde::Serialize;
use sqlx::FromRow;

/// Row returned by the `*_crear_uft` / `*_asignar_uft` functions
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CreatedRow {
    #[sqlx(rename = "mensaje")]
    pub message: Option<String>,
    pub id: Option<i32>,
}

/// A lifecycle status column that did not match any known value
#[derive(Debug, thiserror::Error)]
#[error("unknown status value '{0}'")]
pub struct UnknownStatus(pub String);
