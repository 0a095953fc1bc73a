//! Core type definitions: messages, request payloads, enriched responses.

pub mod message;
pub mod request;
pub mod response;

pub use message::{Message, MessageRole};
pub use request::{CompletionRequest, SamplingParams};
pub use response::{EnrichedResponse, Sentence};
