use std::path::PathBuf;

use kafka_wire_stub::adapters::incoming::TcpAdapter;
use kafka_wire_stub::config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kafka_wire_stub=info")),
        )
        .init();

    let server_properties = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(server_properties.as_deref())?;
    info!(
        listen_addr = %config.server.listen_addr,
        max_frame_size = config.server.max_frame_size,
        apis = config.catalog.len(),
        "Starting broker"
    );

    let adapter = TcpAdapter::new(
        &config.server.listen_addr,
        config.broker,
        config.protocol_parser,
    )
    .await?;

    adapter.run().await?;

    Ok(())
}
