use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{interpret, Mutation, ServiceError};
use crate::auth::{generate_jwt, Claims, Role};
use crate::database::repository::UserRepository;
use crate::error::FieldErrors;
use crate::middleware::{AuthUser, Validate, Validator};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .required("email", &self.email)
            .email("email", &self.email)
            .required("password", &self.password)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl Validate for ChangePasswordRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .required("current_password", &self.current_password)
            .required("new_password", &self.new_password)
            .min_len("new_password", &self.new_password, 8)
            .check(
                "new_password",
                self.new_password != self.current_password,
                "Must differ from the current password",
            )
            .finish()
    }
}

/// User information returned alongside tokens and by /api/auth/me
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&AuthUser> for UserInfo {
    fn from(user: &AuthUser) -> Self {
        Self {
            id: user.user_id,
            trainer_id: user.trainer_id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        let email = request.email.trim().to_lowercase();
        let row = self
            .users
            .login(&email, &request.password)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Failed login attempt for {}", email);
                ServiceError::InvalidCredentials
            })?;

        let role = Role::parse(&row.role).ok_or_else(|| {
            tracing::warn!("User {} has unsupported role '{}'", row.user_id, row.role);
            ServiceError::Forbidden(format!("Role '{}' cannot use this API", row.role))
        })?;

        let trainer_id = match role {
            Role::Trainer => row.trainer_id,
            Role::Admin => None,
        };

        let claims = Claims::new(row.user_id, trainer_id, row.name.clone(), row.email.clone(), role)?;
        let token = generate_jwt(&claims)?;

        tracing::info!("User {} logged in as {}", row.email, role);

        Ok(LoginResponse {
            token,
            expires_in: claims.expires_in(),
            user: UserInfo {
                id: row.user_id,
                trainer_id,
                name: row.name,
                email: row.email,
                role,
            },
        })
    }

    pub async fn change_password(
        &self,
        user: &AuthUser,
        request: &ChangePasswordRequest,
    ) -> Result<Mutation, ServiceError> {
        let message = self
            .users
            .change_password(user.user_id, &request.current_password, &request.new_password)
            .await?;
        interpret(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_email_and_password() {
        let errors = LoginRequest {
            email: "not-an-email".into(),
            password: "".into(),
        }
        .validate()
        .unwrap_err();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn new_password_must_change_and_be_long_enough() {
        let same = ChangePasswordRequest {
            current_password: "cognicare2024".into(),
            new_password: "cognicare2024".into(),
        };
        assert!(same.validate().is_err());

        let short = ChangePasswordRequest {
            current_password: "cognicare2024".into(),
            new_password: "abc".into(),
        };
        assert_eq!(short.validate().unwrap_err()["new_password"], "Must be at least 8 characters");
    }
}
