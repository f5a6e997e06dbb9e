use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// Platform roles as stored in the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "entrenador")]
    Trainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "entrenador",
        }
    }

    /// Parse the role column returned by the login function.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "admin" | "administrador" => Some(Role::Admin),
            "entrenador" | "trainer" => Some(Role::Trainer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Trainer id, present only for trainer accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub jti: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(
        user_id: i32,
        trainer_id: Option<i32>,
        name: String,
        email: String,
        role: Role,
    ) -> Result<Self, JwtError> {
        let expiry_hours = config::config().security.jwt_expiry_hours;
        Self::with_expiry(user_id, trainer_id, name, email, role, expiry_hours)
    }

    pub fn with_expiry(
        user_id: i32,
        trainer_id: Option<i32>,
        name: String,
        email: String,
        role: Role,
        expiry_hours: u64,
    ) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                JwtError::TokenGeneration(format!("token expiry of {expiry_hours} hours is out of range"))
            })?
            .timestamp();

        Ok(Self {
            sub: user_id,
            trainer_id,
            name,
            email,
            role,
            jti: Uuid::new_v4(),
            exp,
            iat: now.timestamp(),
        })
    }

    /// Seconds until the token expires.
    pub fn expires_in(&self) -> i64 {
        (self.exp - self.iat).max(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("JWT secret not configured")]
    InvalidSecret,
    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    encode_with_secret(claims, &config::config().security.jwt_secret)
}

pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    decode_with_secret(token, &config::config().security.jwt_secret)
}

pub fn encode_with_secret(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn decode_with_secret(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainer_claims() -> Claims {
        Claims::with_expiry(7, Some(3), "Ana Torres".into(), "ana@cognicare.app".into(), Role::Trainer, 1)
            .unwrap()
    }

    #[test]
    fn token_carries_trainer_identity() {
        let token = encode_with_secret(&trainer_claims(), "s3cret").unwrap();
        let claims = decode_with_secret(&token, "s3cret").unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.trainer_id, Some(3));
        assert_eq!(claims.role, Role::Trainer);
        assert_eq!(claims.expires_in(), 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_with_secret(&trainer_claims(), "s3cret").unwrap();
        assert!(matches!(
            decode_with_secret(&token, "other"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        assert!(matches!(
            encode_with_secret(&trainer_claims(), ""),
            Err(JwtError::InvalidSecret)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = trainer_claims();
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = encode_with_secret(&claims, "s3cret").unwrap();
        assert!(decode_with_secret(&token, "s3cret").is_err());
    }

    #[test]
    fn oversized_expiry_is_a_generation_error() {
        let result = Claims::with_expiry(7, Some(3), "Ana Torres".into(), "ana@cognicare.app".into(), Role::Trainer, u64::MAX);
        assert!(matches!(result, Err(JwtError::TokenGeneration(_))));

        let result = Claims::with_expiry(7, None, "Ana Torres".into(), "ana@cognicare.app".into(), Role::Admin, 1 << 40);
        assert!(matches!(result, Err(JwtError::TokenGeneration(_))));
    }

    #[test]
    fn role_wire_values() {
        assert_eq!(serde_json::to_value(Role::Trainer).unwrap(), "entrenador");
        assert_eq!(Role::parse("Administrador"), Some(Role::Admin));
        assert_eq!(Role::parse("estudiante"), None);
    }
}
