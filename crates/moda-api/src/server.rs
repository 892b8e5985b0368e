//! HTTP server for the profile read API.
//!
//! The client configuration is verified once at startup and the resulting
//! handle is shared by every request, so the underlying connection pool is
//! reused.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use moda_core::config::Config;
use moda_core::{ConfigError, EvmAddress};
use moda_evm::{verify_config, ClientConfig};

use crate::routes::build_router;

/// Shared application state available to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client configuration with the verified handle pinned in. Accessors
    /// still re-run the cheap, I/O-free verification per request.
    pub client: ClientConfig,
    /// Registry queried by `/contract-profiles`.
    pub profile_registry: Option<EvmAddress>,
    /// First block `/contract-profiles` scans.
    pub registry_from_block: Option<u64>,
}

impl AppState {
    /// Verifies `client` and pins the resulting handle into the state.
    pub fn new(
        client: ClientConfig,
        profile_registry: Option<EvmAddress>,
    ) -> Result<Self, ConfigError> {
        let verified = verify_config(&client)?;
        Ok(Self {
            client: ClientConfig {
                client: Some(verified.client().clone()),
                ..client
            },
            profile_registry,
            registry_from_block: None,
        })
    }

    pub fn with_registry_from_block(mut self, block: Option<u64>) -> Self {
        self.registry_from_block = block;
        self
    }

    /// Builds state from the config file, honouring CLI overrides.
    pub fn from_config(
        config: &Config,
        chain: Option<&str>,
        rpc_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let endpoint = config.resolve(chain, rpc_url);
        Ok(Self::new(ClientConfig::from(&endpoint), endpoint.profile_registry)?
            .with_registry_from_block(endpoint.profile_registry_from_block))
    }
}

/// HTTP server exposing the profile read API.
pub struct ApiServer;

impl ApiServer {
    /// Binds `addr` and serves until the process exits.
    pub async fn start(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        Self::serve(listener, state).await
    }

    /// Serves on an already bound listener.
    pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
        info!(
            "moda-api listening on {} (chain {:?})",
            listener.local_addr()?,
            state.client.chain
        );
        axum::serve(listener, build_router(state)).await
    }
}
