//! Validate that an endpoint is reachable and accepts its credentials,
//! the way a config flow would before persisting the configuration.
//!
//! ```bash
//! HOMECHAT_BASE_URL=http://localhost:1234/v1 cargo run --example validate_endpoint
//! ```

use homechat::config::{DEFAULT_CUSTOM_BASE_URL, DEFAULT_MODEL};
use homechat::{validate_endpoint, ChatClientBuilder, Endpoint};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

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

    match validate_endpoint(&client).await {
        Ok(()) => {
            println!("endpoint ok");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}: {err}", err.reason_code());
            std::process::exit(1);
        }
    }
}
