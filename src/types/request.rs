//! Completion request payload.

use serde::{Deserialize, Serialize};

use crate::config::CompletionDefaults;
use crate::types::message::Message;

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl SamplingParams {
    pub fn from_defaults(defaults: &CompletionDefaults) -> Self {
        Self {
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            top_p: defaults.top_p,
            frequency_penalty: defaults.frequency_penalty,
            presence_penalty: defaults.presence_penalty,
        }
    }
}

/// One chat-completion request. Built fresh per call, never persisted.
///
/// Serializes to the flat JSON body the chat-completions wire contract
/// expects (`model`, `messages`, then the sampling parameters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(flatten)]
    pub params: SamplingParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo-instruct".into(),
            messages: vec![Message::system("Be brief."), Message::user("Hi")],
            params: SamplingParams::from_defaults(&CompletionDefaults::default()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["frequency_penalty"], 0.0);
        assert_eq!(json["presence_penalty"], 0.0);
    }
}
