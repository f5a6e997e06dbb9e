use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, FieldErrors};

/// Request payloads that know how to check their own shape
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Collects every field problem of a payload before reporting them together.
/// Only the first problem per field is kept.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &str, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.errors
                .entry(field.to_string())
                .or_insert_with(|| message.into());
        }
        self
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, !value.trim().is_empty(), "This field is required")
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        self.check(
            field,
            value.chars().count() <= max,
            format!("Must be at most {} characters", max),
        )
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        self.check(
            field,
            value.chars().count() >= min,
            format!("Must be at least {} characters", min),
        )
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_email(value), "Must be a valid email address")
    }

    /// Ecuadorian cédula: exactly ten digits
    pub fn national_id(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        self.check(
            field,
            value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()),
            "Must contain exactly 10 digits",
        )
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.check(
                field,
                (7..=15).contains(&v.len()) && v.chars().all(|c| c.is_ascii_digit()),
                "Must contain between 7 and 15 digits",
            ),
            None => self,
        }
    }

    pub fn positive(&mut self, field: &str, value: i32) -> &mut Self {
        self.check(field, value > 0, "Must be a positive integer")
    }

    pub fn range(&mut self, field: &str, value: i32, min: i32, max: i32) -> &mut Self {
        self.check(
            field,
            (min..=max).contains(&value),
            format!("Must be between {} and {}", min, max),
        )
    }

    pub fn score(&mut self, field: &str, value: f64) -> &mut Self {
        self.check(
            field,
            value.is_finite() && (0.0..=100.0).contains(&value),
            "Must be between 0 and 100",
        )
    }

    pub fn finish(&mut self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

fn is_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// JSON body extractor that maps malformed bodies to INVALID_JSON and runs
/// the payload's [`Validate`] impl, reporting failures as VALIDATION_ERROR.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;

        value
            .validate()
            .map_err(|field_errors| ApiError::validation_error("Invalid request fields", Some(field_errors)))?;

        Ok(ValidJson(value))
    }
}

/// Query string extractor that answers malformed filters with BAD_REQUEST.
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(ValidQuery(value))
    }
}
