//! `moda name` — read a profile's display name.

use moda_evm::{get_name, ClientConfig, GetNameArgs};

use crate::GlobalArgs;

/// Run the `name` subcommand.
pub async fn run(global: &GlobalArgs, address: String) -> Result<(), Box<dyn std::error::Error>> {
    let (_, endpoint) = super::resolve_endpoint(global)?;

    let args = GetNameArgs {
        config: ClientConfig::from(&endpoint),
        profile_address: address,
    };
    let name = get_name(&args).await?;

    println!("{name}");
    Ok(())
}
