//! Endpoint configuration and stored completion defaults.
//!
//! Everything here is set once when the service is configured and treated
//! as immutable for the life of the client; per-call overrides never write
//! back into it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Base address of the hosted API.
pub const CLOUD_BASE_URL: &str = "https://api.openai.com/v1";

/// Default base address for self-hosted endpoints.
pub const DEFAULT_CUSTOM_BASE_URL: &str = "http://localhost:1234/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Default system prompt.
pub const DEFAULT_MOOD: &str = "Your answers are short but precise.";

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Self-hosted endpoints usually don't check credentials, but the wire
/// format requires a bearer token, so a placeholder is sent.
pub(crate) const PLACEHOLDER_API_KEY: &str = "nokey";

/// Where completions are dispatched to.
///
/// There is exactly one meaningful distinction between deployments: the
/// hosted API (fixed base address, real credential) and a self-hosted
/// OpenAI-compatible endpoint (operator-supplied base address, placeholder
/// credential).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "endpoint_type", rename_all = "lowercase")]
pub enum Endpoint {
    Cloud { api_key: String },
    Custom { base_url: String },
}

impl Endpoint {
    pub fn cloud(api_key: impl Into<String>) -> Self {
        Endpoint::Cloud {
            api_key: api_key.into(),
        }
    }

    pub fn custom(base_url: impl Into<String>) -> Self {
        Endpoint::Custom {
            base_url: base_url.into(),
        }
    }

    /// Base address completions are POSTed under.
    pub fn base_url(&self) -> &str {
        match self {
            Endpoint::Cloud { .. } => CLOUD_BASE_URL,
            Endpoint::Custom { base_url } => base_url,
        }
    }

    pub(crate) fn api_key(&self) -> &str {
        match self {
            Endpoint::Cloud { api_key } => api_key,
            Endpoint::Custom { .. } => PLACEHOLDER_API_KEY,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Endpoint::Cloud { api_key } => {
                if api_key.trim().is_empty() {
                    return Err(Error::configuration("cloud endpoint requires an API key"));
                }
            }
            Endpoint::Custom { base_url } => {
                Url::parse(base_url).map_err(|e| {
                    Error::configuration(format!("invalid base address {base_url:?}: {e}"))
                })?;
            }
        }
        Ok(())
    }
}

/// Stored completion parameters. Any of these can be overridden per call;
/// absent call fields fall back to the values here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionDefaults {
    /// System prompt prepended to every request.
    pub mood: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for CompletionDefaults {
    fn default() -> Self {
        Self {
            mood: DEFAULT_MOOD.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

impl CompletionDefaults {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::configuration(format!(
                "temperature {} out of range [0, 2]",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(Error::configuration("max_tokens must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.top_p) || self.top_p == 0.0 {
            return Err(Error::configuration(format!(
                "top_p {} out of range (0, 1]",
                self.top_p
            )));
        }
        for (name, value) in [
            ("frequency_penalty", self.frequency_penalty),
            ("presence_penalty", self.presence_penalty),
        ] {
            if !(-2.0..=2.0).contains(&value) {
                return Err(Error::configuration(format!(
                    "{name} {value} out of range [-2, 2]"
                )));
            }
        }
        Ok(())
    }
}

/// Full configuration of one service instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: Endpoint,
    pub model: String,
    pub defaults: CompletionDefaults,
}

impl ServiceConfig {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            model: DEFAULT_MODEL.to_string(),
            defaults: CompletionDefaults::default(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::configuration("model identifier must not be empty"));
        }
        self.endpoint.validate()?;
        self.defaults.validate()
    }
}
