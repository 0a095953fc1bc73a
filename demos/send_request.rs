//! Send one chat request to a configured endpoint and print the enriched
//! response as JSON.
//!
//! ```bash
//! # Self-hosted endpoint:
//! HOMECHAT_BASE_URL=http://localhost:1234/v1 \
//!   cargo run --example send_request -- "Hello, how are you?"
//!
//! # Hosted API:
//! HOMECHAT_API_KEY=sk-... HOMECHAT_MODEL=gpt-4o-mini \
//!   cargo run --example send_request -- "Hello, how are you?"
//! ```

use homechat::config::{DEFAULT_CUSTOM_BASE_URL, DEFAULT_MODEL};
use homechat::{ChatClientBuilder, Endpoint, ServiceCall};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, how are you?".to_string());

    let endpoint = match std::env::var("HOMECHAT_API_KEY") {
        Ok(api_key) => Endpoint::cloud(api_key),
        Err(_) => Endpoint::custom(
            std::env::var("HOMECHAT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CUSTOM_BASE_URL.to_string()),
        ),
    };

    let client = ChatClientBuilder::new()
        .endpoint(endpoint)
        .model(std::env::var("HOMECHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()))
        .build()?;

    let response = client.send_request(ServiceCall::new(message)).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
