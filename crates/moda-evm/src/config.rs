//! Client configuration and its verification.
//!
//! A [`ClientConfig`] is what callers hand to every accessor. It must resolve
//! to exactly one usable client handle, checked by [`verify_config`], before
//! any request is attempted.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use moda_core::config::ResolvedEndpoint;
use moda_core::{Chain, ConfigError};

use crate::adapter::{EvmAdapter, EvmAdapterError};
use crate::reader::ContractReader;

/// Caller-supplied configuration: which chain, and how to reach it.
///
/// Either pass a ready client handle (a wallet-injected provider, a shared
/// adapter, a test double) or an RPC endpoint to build one from. A supplied
/// client takes precedence over the endpoint.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Chain selector: a name (`polygon`, `mumbai`), an alias (`mainnet`,
    /// `testnet`) or a numeric chain ID.
    pub chain: Option<String>,
    pub rpc_url: Option<String>,
    pub client: Option<Arc<dyn ContractReader>>,
    /// Applied to adapters built from `rpc_url`.
    pub request_timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("chain", &self.chain)
            .field("rpc_url", &self.rpc_url)
            .field("client", &self.client.as_ref().map(|_| "<client>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: Some(chain.into()),
            ..Default::default()
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    pub fn with_client(mut self, client: Arc<dyn ContractReader>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl From<&ResolvedEndpoint> for ClientConfig {
    fn from(endpoint: &ResolvedEndpoint) -> Self {
        Self {
            chain: Some(endpoint.chain.clone()),
            rpc_url: endpoint.rpc_url.clone(),
            client: None,
            request_timeout: Some(Duration::from_secs(endpoint.request_timeout_secs)),
        }
    }
}

/// A configuration that passed [`verify_config`].
#[derive(Clone)]
pub struct VerifiedConfig {
    chain: Chain,
    client: Arc<dyn ContractReader>,
}

impl fmt::Debug for VerifiedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifiedConfig")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl VerifiedConfig {
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// The ready-to-use client handle.
    pub fn client(&self) -> &Arc<dyn ContractReader> {
        &self.client
    }
}

/// Checks that `config` resolves to a supported chain and a client handle.
///
/// Performs no network I/O. Building an adapter from an endpoint only parses
/// the URL.
pub fn verify_config(config: &ClientConfig) -> Result<VerifiedConfig, ConfigError> {
    let selector = config
        .chain
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingChain)?;
    let chain: Chain = selector
        .parse()
        .map_err(|_| ConfigError::UnsupportedChain(selector.to_string()))?;

    if let Some(client) = &config.client {
        return Ok(VerifiedConfig {
            chain,
            client: Arc::clone(client),
        });
    }

    let rpc_url = config
        .rpc_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingClient)?;
    let mut adapter = EvmAdapter::new(rpc_url).map_err(|e| match e {
        EvmAdapterError::UrlParse(reason) => ConfigError::InvalidRpcUrl {
            url: rpc_url.to_string(),
            reason,
        },
    })?;
    if let Some(timeout) = config.request_timeout {
        adapter = adapter.with_timeout(timeout);
    }

    Ok(VerifiedConfig {
        chain,
        client: Arc::new(adapter),
    })
}
