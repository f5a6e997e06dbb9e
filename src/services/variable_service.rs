use serde::Deserialize;
use sqlx::PgPool;

use super::faculty_service::trimmed;
use super::{ensure_id, interpret, interpret_created, Mutation, ServiceError};
use crate::database::models::CognitiveVariable;
use crate::database::repository::VariableRepository;
use crate::error::FieldErrors;
use crate::middleware::{Validate, Validator};

#[derive(Debug, Deserialize)]
pub struct VariableRequest {
    pub name: String,
    pub description: Option<String>,
}

impl Validate for VariableRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name).max_len("name", &self.name, 100);
        if let Some(description) = &self.description {
            v.max_len("description", description, 500);
        }
        v.finish()
    }
}

pub struct VariableService {
    variables: VariableRepository,
}

impl VariableService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            variables: VariableRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CognitiveVariable>, ServiceError> {
        Ok(self.variables.select_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<CognitiveVariable, ServiceError> {
        let id = ensure_id("id", id)?;
        Ok(self.variables.select_404(id).await?)
    }

    pub async fn create(&self, request: &VariableRequest) -> Result<Mutation, ServiceError> {
        let row = self
            .variables
            .create(request.name.trim(), trimmed(&request.description))
            .await?;
        interpret_created(row)
    }

    pub async fn update(&self, id: i32, request: &VariableRequest) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        let message = self
            .variables
            .update(id, request.name.trim(), trimmed(&request.description))
            .await?;
        interpret(message)
    }
}
