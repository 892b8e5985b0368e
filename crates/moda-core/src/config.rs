//! YAML configuration for the moda SDK, API server and CLI.
//!
//! ```yaml
//! default_chain: mumbai
//! request_timeout_secs: 30
//! api_bind: 127.0.0.1:9200
//! chains:
//!   80001:
//!     rpc_url: https://rpc-mumbai.example
//!     profile_registry: "0x..."
//!     profile_registry_from_block: 25000000
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::address::EvmAddress;
use crate::chain::Chain;

/// Default request timeout applied to every RPC round trip.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default bind address for the HTTP API.
pub const DEFAULT_API_BIND: &str = "127.0.0.1:9200";

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Per-chain endpoints and contract addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainEntry {
    /// JSON-RPC endpoint for this chain.
    pub rpc_url: String,
    /// Address of the profile registry that emits `ProfileChangedFor`.
    #[serde(default)]
    pub profile_registry: Option<EvmAddress>,
    /// First block to scan for registry events, usually its deployment block.
    #[serde(default)]
    pub profile_registry_from_block: Option<u64>,
}

/// Parsed `config.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Chain used when no override is given.
    pub default_chain: String,
    /// Timeout for a single RPC round trip, in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Bind address for `moda serve`.
    #[serde(default = "default_api_bind")]
    pub api_bind: String,
    /// Chain entries keyed by numeric chain ID.
    #[serde(default)]
    pub chains: HashMap<Chain, ChainEntry>,
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_api_bind() -> String {
    DEFAULT_API_BIND.to_string()
}

impl Config {
    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigFileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigFileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Looks up the entry for a chain, if one is configured.
    pub fn chain_entry(&self, chain: Chain) -> Option<&ChainEntry> {
        self.chains.get(&chain)
    }

    /// Resolves the chain selector and RPC endpoint to use.
    ///
    /// Explicit overrides win over the file. The chain selector is returned
    /// unparsed so that verification reports unsupported values uniformly.
    pub fn resolve(
        &self,
        chain_override: Option<&str>,
        rpc_override: Option<&str>,
    ) -> ResolvedEndpoint {
        let selector = chain_override.unwrap_or(self.default_chain.as_str()).to_string();
        let entry = selector.parse::<Chain>().ok().and_then(|c| self.chain_entry(c));
        ResolvedEndpoint {
            chain: selector,
            rpc_url: rpc_override
                .map(str::to_string)
                .or_else(|| entry.map(|e| e.rpc_url.clone())),
            profile_registry: entry.and_then(|e| e.profile_registry),
            profile_registry_from_block: entry.and_then(|e| e.profile_registry_from_block),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Chain selector, endpoint and registry picked out of a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub chain: String,
    pub rpc_url: Option<String>,
    pub profile_registry: Option<EvmAddress>,
    pub profile_registry_from_block: Option<u64>,
    pub request_timeout_secs: u64,
}
