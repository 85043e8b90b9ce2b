use std::sync::Arc;

use clap::Parser;
use snacks_api::{http, init_tracing, InMemorySnackRepository, ServerConfig, SnacksController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter)?;

    let controller = Arc::new(SnacksController::new(InMemorySnackRepository::seeded()));
    http::serve(controller, &config.addr).await?;
    Ok(())
}
