//! # moda-evm
//!
//! Read-only access to the moda profile contracts.
//!
//! ## Modules
//!
//! - [`abi`] — profile contract ABI using alloy's `sol!` macro
//! - [`reader`] — the [`ContractReader`] seam every accessor reads through
//! - [`adapter`] — alloy-backed JSON-RPC implementation of the seam
//! - [`config`] — client configuration and its verification
//! - [`profile`] — profile accessors

pub mod abi;
pub mod adapter;
pub mod config;
pub mod profile;
pub mod reader;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use adapter::{EvmAdapter, EvmAdapterError};
pub use config::{verify_config, ClientConfig, VerifiedConfig};
pub use profile::{get_contract_profiles, get_name, ContractProfilesArgs, GetNameArgs};
pub use reader::{ContractReader, LogQuery, RawLog};

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::{Address, Bytes, B256};
