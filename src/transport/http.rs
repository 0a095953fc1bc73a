use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::transport::CompletionDispatch;
use crate::types::request::CompletionRequest;
use crate::{Error, Result};

/// HTTP implementation of [`CompletionDispatch`] for OpenAI-compatible
/// chat-completion endpoints.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Self::new_with_base_url(config, None)
    }

    /// Build a transport with an explicit base URL instead of the one the
    /// endpoint configuration implies.
    ///
    /// This is primarily for testing with mock servers.
    pub fn new_with_base_url(
        config: &ServiceConfig,
        base_url_override: Option<&str>,
    ) -> Result<Self> {
        // Minimal production-friendly default (env-overridable).
        let timeout_secs = env::var("HOMECHAT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url_override
            .unwrap_or_else(|| config.endpoint.base_url())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            api_key: config.endpoint.api_key().to_string(),
        })
    }
}

#[async_trait]
impl CompletionDispatch for HttpTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        // Correlation id for log linkage; providers may ignore the header.
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, url = %url, model = %request.model, "dispatching completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("x-request-id", &request_id)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth(remote_message(response).await));
        }
        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote_message(response).await,
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_content(&body)
    }
}

/// Pull the human-readable message out of the standard
/// `{"error": {"message": ...}}` envelope, falling back to the raw body.
async fn remote_message(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => error_envelope_message(&body).unwrap_or(body),
        Err(e) => e.to_string(),
    }
}

fn error_envelope_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

fn extract_content(body: &serde_json::Value) -> Result<String> {
    let content = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| Error::malformed("response carries no choices[0].message.content"))?;

    if content.is_empty() {
        return Err(Error::malformed("completion content is empty"));
    }
    Ok(content.to_string())
}
