pub mod auth_service;
pub mod faculty_service;
pub mod session_service;
pub mod student_service;
pub mod trainer_service;
pub mod training_service;
pub mod variable_service;

pub use auth_service::AuthService;
pub use faculty_service::FacultyService;
pub use session_service::SessionService;
pub use student_service::StudentService;
pub use trainer_service::TrainerService;
pub use training_service::TrainingService;
pub use variable_service::VariableService;

use serde::Serialize;

use crate::auth::JwtError;
use crate::database::models::CreatedRow;
use crate::database::outcome::{classify, Outcome};
use crate::database::DatabaseError;
use crate::error::FieldErrors;
use crate::middleware::Validator;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Invalid fields: {0:?}")]
    Validation(FieldErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Token(#[from] JwtError),
}

/// Successful result of a mutating stored function
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mutation {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// Map the message of a `*_ufs` call to success or a typed client error
pub fn interpret(message: Option<String>) -> Result<Mutation, ServiceError> {
    let message = message.map(|m| m.trim().to_string()).unwrap_or_default();

    match classify(&message) {
        Outcome::Success => Ok(Mutation { message, id: None }),
        Outcome::NotFound => Err(ServiceError::NotFound(message)),
        Outcome::Forbidden => Err(ServiceError::Forbidden(message)),
        Outcome::Conflict => Err(ServiceError::Conflict(message)),
        Outcome::InvalidState => Err(ServiceError::InvalidState(message)),
        Outcome::Rejected => {
            tracing::warn!("Database rejected operation: {:?}", message);
            if message.is_empty() {
                Err(ServiceError::Rejected("The operation was not applied".to_string()))
            } else {
                Err(ServiceError::Rejected(message))
            }
        }
    }
}

/// Same as [`interpret`] for the `*_uft` creation calls, keeping the new id
pub fn interpret_created(row: CreatedRow) -> Result<Mutation, ServiceError> {
    let mutation = interpret(row.message)?;
    Ok(Mutation { id: row.id, ..mutation })
}

/// Path ids must be positive before they reach the database
pub fn ensure_id(field: &str, id: i32) -> Result<i32, ServiceError> {
    Validator::new()
        .positive(field, id)
        .finish()
        .map_err(ServiceError::Validation)?;
    Ok(id)
}
