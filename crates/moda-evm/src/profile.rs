//! Profile accessors.
//!
//! Every accessor runs the same gated pipeline: verify the config, validate
//! each address, issue exactly one read, then map the raw result. A failed
//! gate returns immediately, so malformed input never reaches the network.

use alloy::primitives::Address;
use alloy::sol_types::{SolCall, SolEvent};
use moda_core::{parse_address, AddressError, ProfileError, ReadError};
use tracing::{debug, warn};

use crate::abi::IProfile;
use crate::config::{verify_config, ClientConfig};
use crate::reader::LogQuery;

/// Arguments for [`get_name`].
#[derive(Debug, Clone)]
pub struct GetNameArgs {
    pub config: ClientConfig,
    pub profile_address: String,
}

/// Reads the display name stored on a profile contract.
///
/// An empty name, or empty return data from an address without code, is
/// reported as [`ProfileError::NameUndefined`]; a successful result is
/// never empty.
pub async fn get_name(args: &GetNameArgs) -> Result<String, ReadError> {
    let verified = verify_config(&args.config)?;
    let profile = parse_address(&args.profile_address, AddressError::ProfileAddressInvalid)?;

    debug!(chain = %verified.chain(), %profile, "reading profile name");
    let data = verified
        .client()
        .call(profile, IProfile::nameCall {}.abi_encode().into())
        .await?;

    if data.is_empty() {
        return Err(ProfileError::NameUndefined.into());
    }
    let name = <IProfile::nameCall as SolCall>::abi_decode_returns(&data)
        .map_err(|e| ProfileError::NameUndecodable(e.to_string()))?;
    if name.is_empty() {
        return Err(ProfileError::NameUndefined.into());
    }
    Ok(name)
}

/// Arguments for [`get_contract_profiles`].
#[derive(Debug, Clone)]
pub struct ContractProfilesArgs {
    pub config: ClientConfig,
    /// Registry that emits `ProfileChangedFor`.
    pub registry_address: String,
    /// Account whose profile changes are looked up.
    pub caller: String,
    /// First block to scan. Genesis when unset, which many hosted RPC
    /// endpoints refuse to serve.
    pub from_block: Option<u64>,
}

/// Lists the profile contracts `caller` has changed, oldest first.
///
/// Queries the registry's `ProfileChangedFor` history once and returns each
/// contract address the first time it appears.
pub async fn get_contract_profiles(args: &ContractProfilesArgs) -> Result<Vec<Address>, ReadError> {
    let verified = verify_config(&args.config)?;
    let registry = parse_address(&args.registry_address, AddressError::RegistryAddressInvalid)?;
    let caller = parse_address(&args.caller, AddressError::CallerAddressInvalid)?;

    let mut query = LogQuery::new(registry, IProfile::ProfileChangedFor::SIGNATURE_HASH)
        .topic2(caller.into_word());
    if let Some(block) = args.from_block {
        query = query.from_block(block);
    }

    debug!(chain = %verified.chain(), %registry, %caller, "querying profile changes");
    let logs = verified.client().logs(&query).await?;

    let mut contracts: Vec<Address> = Vec::new();
    for log in &logs {
        let [_, kontract, logged_caller, ..] = log.topics.as_slice() else {
            warn!(tx = ?log.transaction_hash, "skipping ProfileChangedFor log with missing topics");
            continue;
        };
        // Nodes should already filter on topic 2; don't rely on it.
        if Address::from_word(*logged_caller) != caller {
            continue;
        }
        let kontract = Address::from_word(*kontract);
        if !contracts.contains(&kontract) {
            contracts.push(kontract);
        }
    }
    Ok(contracts)
}
