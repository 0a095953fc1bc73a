//! Service client: builder, per-call request surface, dispatch + enrichment.

mod builder;
mod chat;
mod core;

pub use builder::ChatClientBuilder;
pub use chat::ChatRequestBuilder;
pub use core::ChatClient;
