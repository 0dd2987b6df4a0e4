use anyhow::Result;
use clap::Parser;
use ichannel::config::ServiceConfig;
use ichannel::lifecycle::{self, setup_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::parse();
    setup_tracing(config.log_format);

    tracing::info!(bind = %config.bind, buffer_size = config.buffer_size, "Starting iChannel");
    lifecycle::run(config).await?;

    Ok(())
}
