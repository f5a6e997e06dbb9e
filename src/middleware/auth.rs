use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, Claims, JwtError, Role};
use crate::error::ApiError;

/// Authenticated caller extracted from the JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub trainer_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Trainer id the database should check ownership against.
    /// Admins act without one.
    pub fn acting_trainer(&self) -> Option<i32> {
        match self.role {
            Role::Admin => None,
            Role::Trainer => self.trainer_id,
        }
    }

    /// Admins may act on any record, trainers only on records assigned to them
    pub fn may_act_for(&self, owner_trainer_id: i32) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Trainer => self.trainer_id == Some(owner_trainer_id),
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            trainer_id: claims.trainer_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(ApiError::unauthorized)?;

    let claims = validate_jwt(&token).map_err(|e| match e {
        JwtError::InvalidToken(msg) => {
            tracing::warn!("Rejected bearer token: {}", msg);
            ApiError::unauthorized("Invalid or expired token")
        }
        other => other.into(),
    })?;

    let auth_user = AuthUser::from(claims);
    tracing::debug!(
        "Authenticated {} ({}) as {}",
        auth_user.email,
        auth_user.user_id,
        auth_user.role
    );
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Handlers take `AuthUser` directly; the middleware must have run first.
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(extract_jwt_from_headers(&headers_with("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn malformed_headers_are_rejected() {
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Basic dXNlcjpwYXNz")).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Bearer    ")).is_err());
    }

    #[test]
    fn admins_act_without_trainer_scope() {
        let admin = AuthUser {
            user_id: 1,
            trainer_id: Some(9),
            name: "Root".into(),
            email: "root@cognicare.app".into(),
            role: Role::Admin,
        };
        assert_eq!(admin.acting_trainer(), None);

        let trainer = AuthUser { role: Role::Trainer, ..admin };
        assert_eq!(trainer.acting_trainer(), Some(9));
    }

    #[test]
    fn trainers_only_act_for_themselves() {
        let trainer = AuthUser {
            user_id: 20,
            trainer_id: Some(4),
            name: "Carlos".into(),
            email: "carlos@uleam.edu.ec".into(),
            role: Role::Trainer,
        };
        assert!(trainer.may_act_for(4));
        assert!(!trainer.may_act_for(5));

        let orphan = AuthUser { trainer_id: None, ..trainer.clone() };
        assert!(!orphan.may_act_for(4));

        let admin = AuthUser { role: Role::Admin, ..trainer };
        assert!(admin.may_act_for(5));
    }
}
