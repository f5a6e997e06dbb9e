// handlers/public/root.rs - GET / and GET /health

use axum::{http::StatusCode, Extension};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET / - API identification and endpoint map
pub async fn root_get() -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "name": "CogniCare API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Cognitive training management for university students",
        "environment": crate::config::config().environment.as_str(),
        "endpoints": {
            "public": "/, /health, POST /api/auth/login",
            "auth": "/api/auth/me, /api/auth/password (protected)",
            "catalog": "/api/faculties[/:id], /api/variables[/:id] (protected)",
            "students": "/api/students[/:id[/assignments|/progress]] (protected)",
            "trainer": "/api/trainer/students, /api/trainer/assignments (trainer)",
            "training": "/api/assignments/:id[/...], /api/sessions/:id[/...] (protected)",
            "admin": "/api/admin/* (admin)",
        }
    })))
}

/// GET /health - database connectivity check
pub async fn health_get(Extension(pool): Extension<PgPool>) -> ApiResult<Value> {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&pool).await {
        Ok(_) => Ok(ApiResponse::with_status(
            json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            }),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            Err(ApiError::service_unavailable("Database unavailable"))
        }
    }
}
