use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::debug;

use super::{AuthOutcome, Authenticator};
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Message returned when the request carries no token at all.
pub const MISSING_TOKEN_MESSAGE: &str = "missing token";

/// Verifies tokens by POSTing `{"token": ...}` to a verification service.
///
/// | service answer | outcome                                   |
/// |----------------|-------------------------------------------|
/// | 2xx            | accepted, body JSON as payload            |
/// | 4xx            | rejected, body JSON (or text) as payload  |
/// | 5xx, transport | [`AuthError`]                             |
pub struct RemoteAuthenticator {
    client: Client,
    url: Url,
}

impl RemoteAuthenticator {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AuthError::Client)?;

        Ok(RemoteAuthenticator {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    async fn authenticate(&self, token: Option<&str>) -> Result<AuthOutcome, AuthError> {
        let Some(token) = token else {
            debug!("no token supplied, rejecting without calling verification service");
            return Ok(AuthOutcome::rejected(json!({ "message": MISSING_TOKEN_MESSAGE })));
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(AuthError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(AuthError::Request)?;
        debug!(status = status.as_u16(), "token verification service answered");

        classify(status, &body)
    }
}

/// Map the verification service's answer onto an [`AuthOutcome`].
fn classify(status: StatusCode, body: &str) -> Result<AuthOutcome, AuthError> {
    if status.is_success() {
        let payload = serde_json::from_str(body).unwrap_or(Value::Null);
        return Ok(AuthOutcome::accepted(payload));
    }

    if status.is_client_error() {
        let payload = serde_json::from_str(body)
            .unwrap_or_else(|_| json!({ "message": body.trim() }));
        return Ok(AuthOutcome::rejected(payload));
    }

    Err(AuthError::Service {
        status: status.as_u16(),
        body: body.to_string(),
    })
}
