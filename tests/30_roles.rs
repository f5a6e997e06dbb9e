mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

async fn call(method: Method, path: &str, token: Option<String>, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let server = common::ensure_server().await?;
    let mut request = reqwest::Client::new().request(method, server.url(path));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request.json(&body);
    }
    let res = request.send().await?;
    let status = res.status();
    let body = res.json().await.unwrap_or(Value::Null);
    Ok((status, body))
}

#[tokio::test]
async fn admin_routes_reject_trainers() -> Result<()> {
    for (method, path) in [
        (Method::GET, "/api/admin/trainers"),
        (Method::GET, "/api/admin/assignments"),
        (Method::POST, "/api/admin/faculties"),
        (Method::PATCH, "/api/admin/students/3/status"),
    ] {
        let (status, body) = call(method.clone(), path, Some(common::trainer_token(4)), Some(json!({}))).await?;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, path);
        assert_eq!(body["code"], "FORBIDDEN");
    }
    Ok(())
}

#[tokio::test]
async fn admin_routes_require_authentication() -> Result<()> {
    let (status, _) = call(Method::GET, "/api/admin/trainers", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn trainer_routes_reject_admins() -> Result<()> {
    let (status, _) = call(Method::GET, "/api/trainer/assignments", Some(common::admin_token()), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admin_payloads_are_validated() -> Result<()> {
    let (status, body) = call(
        Method::POST,
        "/api/admin/assignments",
        Some(common::admin_token()),
        Some(json!({
            "student_id": 0,
            "trainer_id": 4,
            "variable_id": 1,
            "planned_sessions": 500
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["student_id"].is_string());
    assert!(body["field_errors"]["planned_sessions"].is_string());

    let (status, body) = call(
        Method::POST,
        "/api/admin/trainers",
        Some(common::admin_token()),
        Some(json!({
            "first_names": "Lucía",
            "last_names": "Vera",
            "national_id": "1301112223",
            "email": "lucia.vera@uleam.edu.ec",
            "password": "1234"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["password"].is_string());
    Ok(())
}

#[tokio::test]
async fn session_actions_validate_their_bodies() -> Result<()> {
    let (status, body) = call(
        Method::POST,
        "/api/sessions/12/abandon",
        Some(common::trainer_token(4)),
        Some(json!({ "reason": "" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["reason"].is_string());

    let (status, _) = call(
        Method::PUT,
        "/api/assignments/7/training",
        Some(common::trainer_token(4)),
        Some(json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn reads_fail_cleanly_without_a_database() -> Result<()> {
    let (status, body) = call(Method::GET, "/api/faculties", Some(common::trainer_token(4)), None).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    Ok(())
}
