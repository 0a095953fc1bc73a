//! # homechat
//!
//! Chat-completion service runtime for home-automation platforms.
//!
//! ## Overview
//!
//! This library turns a chat-completion API (cloud or self-hosted,
//! OpenAI-compatible) into a callable service for a home-automation host.
//! One call runs a small pipeline: merge the call's fields with stored
//! defaults into a request payload, dispatch it to the completion
//! endpoint, then enrich the reply with language identification and
//! sentence segmentation before handing it back.
//!
//! The host platform's own machinery — config-flow UI, credential
//! persistence, service-call transport — stays outside. The crate exposes
//! the pieces those collaborators plug into: typed setup validation with
//! reason codes, a deserializable call payload, a serializable response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use homechat::{ChatClientBuilder, Endpoint, ServiceCall};
//!
//! #[tokio::main]
//! async fn main() -> homechat::Result<()> {
//!     let client = ChatClientBuilder::new()
//!         .endpoint(Endpoint::custom("http://localhost:1234/v1"))
//!         .mood("Your answers are short but precise.")
//!         .build()?;
//!
//!     let response = client.send_request(ServiceCall::new("Hello, how are you?")).await?;
//!     println!("[{}] {}", response.language, response.response);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint configuration and stored completion defaults |
//! | [`types`] | Core type definitions (messages, requests, responses) |
//! | [`client`] | Service client, builder, per-call request surface |
//! | [`transport`] | Completion dispatch trait and HTTP implementation |
//! | [`enrich`] | Language identification and sentence segmentation |
//! | [`service`] | Host-platform service payload and handler adapter |
//! | [`setup`] | Setup-time endpoint validation with reason codes |

pub mod client;
pub mod config;
pub mod enrich;
pub mod service;
pub mod setup;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatClient, ChatClientBuilder, ChatRequestBuilder};
pub use config::{CompletionDefaults, Endpoint, ServiceConfig};
pub use enrich::ResponseEnricher;
pub use service::{handle_send_request, ServiceCall, SERVICE_NAME};
pub use setup::{validate_endpoint, SetupError};
pub use transport::{CompletionDispatch, HttpTransport};
pub use types::message::{Message, MessageRole};
pub use types::request::{CompletionRequest, SamplingParams};
pub use types::response::{EnrichedResponse, Sentence};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
