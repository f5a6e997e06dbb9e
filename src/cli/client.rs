use anyhow::{anyhow, bail, Context};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Thin HTTP client over the `{ success, data | error, code }` envelope
pub struct ApiClient {
    base_url: Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("cognicare-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: Option<&B>) -> anyhow::Result<Value> {
        self.send(Method::POST, path, body).await
    }

    async fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> anyhow::Result<Value> {
        let url = self.base_url.join(path)?;
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!("{} {}", method, url);
        let response = request
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.base_url))?;
        let status = response.status();
        let envelope: Value = response
            .json()
            .await
            .with_context(|| format!("{} {} returned a non-JSON body ({})", method, path, status))?;

        unwrap_envelope(status, envelope)
    }
}

/// Return `data` of a success envelope, or turn the error envelope into an error
pub fn unwrap_envelope(status: StatusCode, envelope: Value) -> anyhow::Result<Value> {
    if envelope.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(envelope.get("data").cloned().unwrap_or(Value::Null));
    }

    let message = envelope
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("request failed");
    let code = envelope.get("code").and_then(Value::as_str).unwrap_or("UNKNOWN");

    if let Some(fields) = envelope.get("field_errors").and_then(Value::as_object) {
        let details: Vec<String> = fields
            .iter()
            .map(|(field, problem)| format!("{}: {}", field, problem.as_str().unwrap_or_default()))
            .collect();
        bail!("{} [{} {}] ({})", message, status.as_u16(), code, details.join("; "));
    }

    Err(anyhow!("{} [{} {}]", message, status.as_u16(), code))
}
