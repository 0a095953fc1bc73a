//! Setup-time endpoint validation.
//!
//! The host platform's config flow calls [`validate_endpoint`] before it
//! persists a candidate configuration. The outcome distinguishes exactly
//! two conditions — the endpoint was unreachable, or it was reached and
//! rejected the configuration — because that is what the flow can show
//! the operator.

use tracing::debug;

use crate::client::ChatClient;
use crate::types::message::Message;
use crate::types::request::{CompletionRequest, SamplingParams};

const PROBE_MESSAGE: &str = "Say this is a test.";
const PROBE_MAX_TOKENS: u32 = 5;

/// Why setup validation failed. `reason_code` maps onto the config flow's
/// error display keys.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot connect to the completion endpoint")]
    CannotConnect(#[source] crate::Error),

    /// Credential rejected — or any other non-connectivity failure, which
    /// the flow cannot tell apart.
    #[error("completion endpoint rejected the configuration")]
    InvalidAuth(#[source] crate::Error),
}

impl SetupError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            SetupError::CannotConnect(_) => "cannot_connect",
            SetupError::InvalidAuth(_) => "invalid_auth",
        }
    }
}

/// Verify that the client's endpoint is reachable and accepts its
/// credentials by sending a minimal probe completion.
pub async fn validate_endpoint(client: &ChatClient) -> Result<(), SetupError> {
    let config = client.config();
    let mut params = SamplingParams::from_defaults(&config.defaults);
    params.max_tokens = PROBE_MAX_TOKENS;

    let probe = CompletionRequest {
        model: config.model.clone(),
        messages: vec![Message::system(PROBE_MESSAGE)],
        params,
    };

    debug!(model = %probe.model, "validating endpoint with probe request");
    match client.dispatcher().complete(&probe).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_connectivity() => Err(SetupError::CannotConnect(err)),
        Err(err) => Err(SetupError::InvalidAuth(err)),
    }
}
