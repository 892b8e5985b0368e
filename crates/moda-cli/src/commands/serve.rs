//! `moda serve` — start the HTTP API.

use std::net::SocketAddr;

use moda_api::{ApiServer, AppState};

use crate::GlobalArgs;

/// Run the `serve` subcommand.
pub async fn run(
    global: &GlobalArgs,
    addr: Option<SocketAddr>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(global)?;
    let state = AppState::from_config(&config, global.chain.as_deref(), global.rpc_url.as_deref())?;

    let addr = match addr {
        Some(addr) => addr,
        None => config.api_bind.parse()?,
    };
    if state.profile_registry.is_none() {
        tracing::warn!("no profile registry configured; /contract-profiles will return 503");
    }

    println!("moda API listening on {addr}");
    ApiServer::start(state, addr).await?;
    Ok(())
}
