use std::sync::Arc;

use anyhow::{Error, Result};
use push_relay::{api, clients::fcm::FcmClient, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let provider = Arc::new(FcmClient::new(&config).await?);

    api::run_api_server(&config, provider).await
}
