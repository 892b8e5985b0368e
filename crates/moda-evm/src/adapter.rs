//! JSON-RPC chain adapter.
//!
//! Connects to an EVM-compatible endpoint through an alloy provider and
//! implements [`ContractReader`] on top of it. Every round trip is bounded by
//! the adapter's timeout.

use std::future::Future;
use std::time::Duration;

use alloy::eips::BlockNumberOrTag;
use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{Filter, TransactionRequest};
use async_trait::async_trait;
use moda_core::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use moda_core::NetworkError;
use thiserror::Error;

use crate::reader::{ContractReader, LogQuery, RawLog};

/// Errors from constructing an adapter.
#[derive(Debug, Error)]
pub enum EvmAdapterError {
    #[error("URL parse error: {0}")]
    UrlParse(String),
}

/// An EVM chain adapter connected to a specific RPC endpoint.
pub struct EvmAdapter {
    provider: DynProvider<Ethereum>,
    rpc_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for EvmAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmAdapter")
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EvmAdapter {
    /// Creates a new adapter for the given RPC URL.
    ///
    /// No request is sent; the provider connects lazily.
    pub fn new(rpc_url: &str) -> Result<Self, EvmAdapterError> {
        let url: alloy::transports::http::reqwest::Url = rpc_url
            .parse()
            .map_err(|e| EvmAdapterError::UrlParse(format!("{e}")))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Gets the chain ID from the connected node.
    pub async fn get_chain_id(&self) -> Result<u64, NetworkError> {
        self.bounded(async { self.provider.get_chain_id().await })
            .await
    }

    async fn bounded<T, E, F>(&self, fut: F) -> Result<T, NetworkError>
    where
        E: std::fmt::Display,
        F: Future<Output = Result<T, E>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| NetworkError::Rpc(e.to_string())),
            Err(_) => Err(NetworkError::Timeout(
                u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }
}

#[async_trait]
impl ContractReader for EvmAdapter {
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, NetworkError> {
        let tx = TransactionRequest::default().to(to).input(input.into());
        self.bounded(async { self.provider.call(tx).await }).await
    }

    async fn logs(&self, query: &LogQuery) -> Result<Vec<RawLog>, NetworkError> {
        let mut filter = Filter::new()
            .address(query.address)
            .event_signature(query.event_signature)
            .from_block(query.from_block.unwrap_or(0))
            .to_block(BlockNumberOrTag::Latest);
        if let Some(topic) = query.topic1 {
            filter = filter.topic1(topic);
        }
        if let Some(topic) = query.topic2 {
            filter = filter.topic2(topic);
        }

        let logs = self
            .bounded(async { self.provider.get_logs(&filter).await })
            .await?;

        Ok(logs
            .into_iter()
            .map(|log| RawLog {
                topics: log.topics().to_vec(),
                data: log.data().data.clone(),
                block_number: log.block_number,
                transaction_hash: log.transaction_hash,
            })
            .collect())
    }
}
