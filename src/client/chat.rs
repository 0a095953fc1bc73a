//! Per-call request surface and the override-precedence merge.

use crate::config::ServiceConfig;
use crate::types::message::Message;
use crate::types::request::{CompletionRequest, SamplingParams};
use crate::types::response::EnrichedResponse;
use crate::Result;

use super::core::ChatClient;

/// Builder for one chat request. Anything not set here falls back to the
/// client's stored defaults.
pub struct ChatRequestBuilder<'a> {
    client: &'a ChatClient,
    message: String,
    mood: Option<String>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl<'a> ChatRequestBuilder<'a> {
    pub(crate) fn new(client: &'a ChatClient, message: impl Into<String>) -> Self {
        Self {
            client,
            message: message.into(),
            mood: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Override the stored system prompt for this call only.
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Dispatch the request and enrich the reply.
    pub async fn execute(self) -> Result<EnrichedResponse> {
        let request = compose_request(
            self.client.config(),
            &self.message,
            self.mood.as_deref(),
            self.temperature,
            self.max_tokens,
        );
        self.client.dispatch_and_enrich(request).await
    }
}

/// Merge per-call overrides with stored defaults into a complete request
/// payload. A field present in the call wins; an absent field falls back to
/// the stored default. Pure; inputs are trusted to be well-typed (the host
/// schema layer validated them).
pub(crate) fn compose_request(
    config: &ServiceConfig,
    message: &str,
    mood: Option<&str>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
) -> CompletionRequest {
    let defaults = &config.defaults;
    let mut params = SamplingParams::from_defaults(defaults);
    if let Some(temperature) = temperature {
        params.temperature = temperature;
    }
    if let Some(max_tokens) = max_tokens {
        params.max_tokens = max_tokens;
    }

    CompletionRequest {
        model: config.model.clone(),
        messages: vec![
            Message::system(mood.unwrap_or(&defaults.mood)),
            Message::user(message),
        ],
        params,
    }
}
