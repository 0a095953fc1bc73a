use std::sync::Arc;

use tracing::debug;

use crate::config::{CompletionDefaults, ServiceConfig};
use crate::enrich::ResponseEnricher;
use crate::service::ServiceCall;
use crate::transport::CompletionDispatch;
use crate::types::request::CompletionRequest;
use crate::types::response::EnrichedResponse;
use crate::Result;

use super::chat::{compose_request, ChatRequestBuilder};

/// Service client for one configured completion endpoint.
///
/// Immutable after build: configuration and the language model are
/// read-only, so concurrent calls share a client without coordination.
pub struct ChatClient {
    config: ServiceConfig,
    dispatch: Arc<dyn CompletionDispatch>,
    enricher: Arc<ResponseEnricher>,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    pub(crate) fn from_parts(
        config: ServiceConfig,
        dispatch: Arc<dyn CompletionDispatch>,
        enricher: Arc<ResponseEnricher>,
    ) -> Self {
        Self {
            config,
            dispatch,
            enricher,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Start a chat request for `message`.
    pub fn chat(&self, message: impl Into<String>) -> ChatRequestBuilder<'_> {
        ChatRequestBuilder::new(self, message)
    }

    /// Handle one service call: build the request from the call's fields
    /// and the stored defaults, dispatch it, enrich the reply.
    pub async fn send_request(&self, call: ServiceCall) -> Result<EnrichedResponse> {
        debug!(?call, "service call received");
        let request = compose_request(
            &self.config,
            &call.message,
            call.mood.as_deref(),
            call.temperature,
            call.max_tokens,
        );
        self.dispatch_and_enrich(request).await
    }

    /// Derive a client with updated stored options, reusing the transport
    /// and the language model.
    pub fn with_defaults(&self, defaults: CompletionDefaults) -> Result<Self> {
        let config = ServiceConfig {
            defaults,
            ..self.config.clone()
        };
        config.validate()?;
        Ok(Self {
            config,
            dispatch: self.dispatch.clone(),
            enricher: self.enricher.clone(),
        })
    }

    pub(crate) async fn dispatch_and_enrich(
        &self,
        request: CompletionRequest,
    ) -> Result<EnrichedResponse> {
        debug!(model = %request.model, messages = request.messages.len(), "dispatching chat request");
        let text = self.dispatch.complete(&request).await?;
        Ok(self.enricher.enrich(&text))
    }

    pub(crate) fn dispatcher(&self) -> &dyn CompletionDispatch {
        self.dispatch.as_ref()
    }
}
