//! # moda
//!
//! Validated on-chain profile reads for the moda music-drop storefront.
//!
//! Re-exports the SDK surface of [`moda_core`] and [`moda_evm`].

pub use moda_core::{
    is_valid_address, AddressError, Chain, ConfigError, NetworkError, ProfileError, ReadError,
};
pub use moda_evm::{
    get_contract_profiles, get_name, verify_config, ClientConfig, ContractProfilesArgs,
    ContractReader, GetNameArgs, VerifiedConfig,
};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
