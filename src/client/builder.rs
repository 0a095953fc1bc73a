use std::sync::Arc;

use crate::config::{CompletionDefaults, Endpoint, ServiceConfig, DEFAULT_MODEL};
use crate::enrich::ResponseEnricher;
use crate::transport::{CompletionDispatch, HttpTransport};
use crate::{Error, Result};

use super::core::ChatClient;

/// Builder for [`ChatClient`].
///
/// Keep this surface small and predictable: an endpoint, a model, the
/// stored options, and two seams (base-URL override, dispatch injection).
pub struct ChatClientBuilder {
    endpoint: Option<Endpoint>,
    model: String,
    defaults: CompletionDefaults,
    base_url_override: Option<String>,
    dispatch: Option<Arc<dyn CompletionDispatch>>,
    enricher: Option<Arc<ResponseEnricher>>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            model: DEFAULT_MODEL.to_string(),
            defaults: CompletionDefaults::default(),
            base_url_override: None,
            dispatch: None,
            enricher: None,
        }
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace all stored options at once.
    pub fn defaults(mut self, defaults: CompletionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the stored system prompt.
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.defaults.mood = mood.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.defaults.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.defaults.max_tokens = max_tokens;
        self
    }

    /// Override the base URL the endpoint configuration implies.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Inject a custom dispatch implementation instead of the HTTP
    /// transport (alternative backends, test doubles).
    pub fn dispatch(mut self, dispatch: Arc<dyn CompletionDispatch>) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Share a prebuilt enricher. Building one loads the language models,
    /// so clients that come and go should reuse a single instance.
    pub fn enricher(mut self, enricher: Arc<ResponseEnricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<ChatClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::configuration("an endpoint is required"))?;
        let config = ServiceConfig {
            endpoint,
            model: self.model,
            defaults: self.defaults,
        };
        config.validate()?;

        let dispatch: Arc<dyn CompletionDispatch> = match self.dispatch {
            Some(dispatch) => dispatch,
            None => Arc::new(HttpTransport::new_with_base_url(
                &config,
                self.base_url_override.as_deref(),
            )?),
        };
        let enricher = self
            .enricher
            .unwrap_or_else(|| Arc::new(ResponseEnricher::new()));

        Ok(ChatClient::from_parts(config, dispatch, enricher))
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
