//! # moda-core
//!
//! Chains, address validation, error taxonomy, configuration and metadata
//! schemas shared by the moda crates.

pub mod address;
pub mod chain;
pub mod config;
pub mod error;
pub mod metadata;

pub use address::{is_valid_address, parse_address, EvmAddress};
pub use chain::{Chain, UnsupportedChainError};
pub use error::{AddressError, ConfigError, NetworkError, ProfileError, ReadError};
