//! `moda contract-profiles` — list profile contracts changed by an account.

use moda_evm::{get_contract_profiles, ClientConfig, ContractProfilesArgs};

use crate::GlobalArgs;

/// Run the `contract-profiles` subcommand.
///
/// Prints the contract addresses as a JSON array.
pub async fn run(
    global: &GlobalArgs,
    caller: String,
    registry: Option<String>,
    from_block: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, endpoint) = super::resolve_endpoint(global)?;

    let registry_address = registry
        .or_else(|| endpoint.profile_registry.map(|r| r.to_string()))
        .ok_or_else(|| {
            format!(
                "no profile registry configured for chain '{}'; pass --registry",
                endpoint.chain
            )
        })?;

    let args = ContractProfilesArgs {
        config: ClientConfig::from(&endpoint),
        registry_address,
        caller,
        from_block: from_block.or(endpoint.profile_registry_from_block),
    };
    let contracts = get_contract_profiles(&args).await?;

    let addresses: Vec<String> = contracts.iter().map(|c| c.to_string()).collect();
    println!("{}", serde_json::to_string_pretty(&addresses)?);
    Ok(())
}
