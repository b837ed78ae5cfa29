mod command;
mod render;
mod session;

use anyhow::Context;
use chatbot_core::{ClientConfig, HttpBackend};
use session::Session;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ClientConfig::from_env().context("failed to load client configuration")?;
    log::info!("Using backend at {}", config.backend_origin());

    let mut session = Session::new(Arc::new(HttpBackend::new(config)));
    session.spawn_health();

    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
