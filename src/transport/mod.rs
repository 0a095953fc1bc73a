//! Completion dispatch.
//!
//! The rest of the crate needs exactly one capability from a completion
//! backend: submit role-tagged messages plus sampling parameters, receive
//! generated text or fail. [`CompletionDispatch`] is that seam;
//! [`HttpTransport`] is the production implementation over HTTP.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::types::request::CompletionRequest;
use crate::Result;

/// The single capability a completion backend must provide.
///
/// Implementors must be `Send + Sync` so a client can be shared across
/// tasks (`Arc<dyn CompletionDispatch>`).
#[async_trait]
pub trait CompletionDispatch: Send + Sync {
    /// Execute one completion request and return the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
