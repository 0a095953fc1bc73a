//! The host-platform service surface.
//!
//! The crate rides on the host's service-call convention: the host
//! validates and hands over a payload, the crate returns a serializable
//! record. [`ServiceCall`] is the payload shape; [`handle_send_request`]
//! is the JSON-in/JSON-out adapter for hosts that pass raw values.

use serde::{Deserialize, Serialize};

use crate::client::ChatClient;
use crate::Result;

/// Name the service is registered under on the host platform.
pub const SERVICE_NAME: &str = "send_request";

/// Payload of one `send_request` service call.
///
/// The host's schema layer validates calls before they reach the crate;
/// unknown fields are rejected here to mirror that contract. Optional
/// fields override the stored defaults for this call only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCall {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ServiceCall {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mood: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Deserialize a raw service payload, run the completion, and serialize
/// the enriched response back.
pub async fn handle_send_request(
    client: &ChatClient,
    payload: serde_json::Value,
) -> Result<serde_json::Value> {
    let call: ServiceCall = serde_json::from_value(payload)?;
    let response = client.send_request(call).await?;
    Ok(serde_json::to_value(response)?)
}
