use serde::Deserialize;
use sqlx::PgPool;

use super::{ensure_id, interpret, interpret_created, Mutation, ServiceError};
use crate::database::models::Faculty;
use crate::database::repository::FacultyRepository;
use crate::error::FieldErrors;
use crate::middleware::{Validate, Validator};

#[derive(Debug, Deserialize)]
pub struct FacultyRequest {
    pub name: String,
    pub acronym: Option<String>,
}

impl Validate for FacultyRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name).max_len("name", &self.name, 150);
        if let Some(acronym) = &self.acronym {
            v.max_len("acronym", acronym, 20);
        }
        v.finish()
    }
}

/// Body of the PATCH .../status endpoints
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub active: bool,
}

impl Validate for StatusRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Ok(())
    }
}

pub struct FacultyService {
    faculties: FacultyRepository,
}

impl FacultyService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            faculties: FacultyRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Faculty>, ServiceError> {
        Ok(self.faculties.select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Faculty, ServiceError> {
        let id = ensure_id("id", id)?;
        Ok(self.faculties.select_404(id).await?)
    }

    pub async fn create(&self, request: &FacultyRequest) -> Result<Mutation, ServiceError> {
        let row = self
            .faculties
            .create(request.name.trim(), trimmed(&request.acronym))
            .await?;
        interpret_created(row)
    }

    pub async fn update(&self, id: i32, request: &FacultyRequest) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        let message = self
            .faculties
            .update(id, request.name.trim(), trimmed(&request.acronym))
            .await?;
        interpret(message)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        interpret(self.faculties.set_active(id, active).await?)
    }
}

/// Blank optional strings are stored as NULL
pub(crate) fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_name_is_required() {
        let request = FacultyRequest {
            name: " ".into(),
            acronym: Some("FCI-EXTREMELY-LONG-ACRONYM".into()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("acronym"));
    }

    #[test]
    fn blank_optionals_become_null() {
        assert_eq!(trimmed(&Some("  ".into())), None);
        assert_eq!(trimmed(&Some(" FCI ".into())), Some("FCI"));
        assert_eq!(trimmed(&None), None);
    }
}
