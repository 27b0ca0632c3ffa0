use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::config;

/// Standard response envelope every backend endpoint uses.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shared HTTP client: base URL, timeout, optional bearer token. Cloned
/// freely into the per-domain services.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::config().api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: None,
        })
    }

    pub fn from_config() -> Result<Self, ServiceError> {
        Self::new(config::config().api.base_url.clone())
    }

    /// Attach the access token sent as `Authorization: Bearer`.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let request = self.http.get(self.url(path));
        self.send(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(request).await
    }

    /// POST for endpoints whose envelope carries no data payload.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ServiceError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send_unchecked::<serde_json::Value>(request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ServiceError> {
        let envelope = self.send_unchecked(request).await?;
        envelope
            .data
            .ok_or_else(|| ServiceError::InvalidResponse("missing data field".to_string()))
    }

    async fn send_unchecked<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ServiceError> {
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if config::config().api.enable_request_logging {
            tracing::debug!(status = status.as_u16(), "api response");
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        if !status.is_success() || !envelope.success {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "backend returned no error message".to_string()),
            });
        }

        Ok(envelope)
    }
}
