use anyhow::Result;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use vendor_relay::config::Settings;
use vendor_relay::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;

    if settings.upstream.base_url.is_none() || settings.upstream.api_key.is_none() {
        warn!("Upstream not fully configured; proxied calls will fail until it is");
    }

    start_server(settings).await?;

    Ok(())
}
