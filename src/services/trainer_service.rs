use serde::Deserialize;
use sqlx::PgPool;

use super::{ensure_id, interpret, interpret_created, Mutation, ServiceError};
use crate::database::models::{Student, Trainer, TrainerInput};
use crate::database::repository::TrainerRepository;
use crate::error::FieldErrors;
use crate::middleware::{Validate, Validator};

impl Validate for TrainerInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("first_names", &self.first_names)
            .max_len("first_names", &self.first_names, 100)
            .required("last_names", &self.last_names)
            .max_len("last_names", &self.last_names, 100)
            .national_id("national_id", &self.national_id)
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref());
        if let Some(specialty) = &self.specialty {
            v.max_len("specialty", specialty, 150);
        }
        v.finish()
    }
}

/// New trainer: profile fields plus the password of the user account
#[derive(Debug, Deserialize)]
pub struct CreateTrainerRequest {
    #[serde(flatten)]
    pub trainer: TrainerInput,
    pub password: String,
}

impl Validate for CreateTrainerRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = self.trainer.validate().err().unwrap_or_default();
        if let Err(password_errors) = Validator::new()
            .required("password", &self.password)
            .min_len("password", &self.password, 8)
            .finish()
        {
            errors.extend(password_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrainerQuery {
    pub active: Option<bool>,
}

pub struct TrainerService {
    trainers: TrainerRepository,
}

impl TrainerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trainers: TrainerRepository::new(pool),
        }
    }

    pub async fn list(&self, query: &TrainerQuery) -> Result<Vec<Trainer>, ServiceError> {
        Ok(self.trainers.select_any(query.active).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Trainer, ServiceError> {
        let id = ensure_id("id", id)?;
        Ok(self.trainers.select_404(id).await?)
    }

    /// Creates the user account and the trainer profile together
    pub async fn create(&self, request: &CreateTrainerRequest) -> Result<Mutation, ServiceError> {
        let input = normalize(&request.trainer);
        interpret_created(self.trainers.create(&input, &request.password).await?)
    }

    pub async fn update(&self, id: i32, input: &TrainerInput) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        let input = normalize(input);
        interpret(self.trainers.update(id, &input).await?)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        interpret(self.trainers.set_active(id, active).await?)
    }

    pub async fn students(&self, trainer_id: i32) -> Result<Vec<Student>, ServiceError> {
        let trainer_id = ensure_id("trainer_id", trainer_id)?;
        self.trainers.select_404(trainer_id).await?;
        Ok(self.trainers.students(trainer_id).await?)
    }
}

fn normalize(input: &TrainerInput) -> TrainerInput {
    let optional = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    TrainerInput {
        first_names: input.first_names.trim().to_string(),
        last_names: input.last_names.trim().to_string(),
        national_id: input.national_id.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        phone: optional(&input.phone),
        specialty: optional(&input.specialty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_merges_profile_and_password_errors() {
        let request: CreateTrainerRequest = serde_json::from_value(serde_json::json!({
            "first_names": "Carlos",
            "last_names": "",
            "national_id": "1309876543",
            "email": "carlos@uleam.edu.ec",
            "specialty": "Neuropsicología",
            "password": "short"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("last_names"));
        assert_eq!(errors["password"], "Must be at least 8 characters");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        let input = normalize(&TrainerInput {
            first_names: " Carlos ".into(),
            last_names: "Mendoza".into(),
            national_id: "1309876543".into(),
            email: "Carlos@ULEAM.edu.ec".into(),
            phone: None,
            specialty: Some("   ".into()),
        });
        assert_eq!(input.first_names, "Carlos");
        assert_eq!(input.email, "carlos@uleam.edu.ec");
        assert_eq!(input.specialty, None);
    }
}
