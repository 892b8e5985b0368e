//! Integration tests for moda.
//!
//! Anvil-dependent tests use **testcontainers** to spin up a Docker-based
//! Anvil node automatically.
//!
//! ```bash
//! # Run everything (Docker must be available):
//! cargo test -p moda-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use moda_core::{NetworkError, ProfileError, ReadError};
    use moda_evm::{
        get_contract_profiles, get_name, ClientConfig, ContractProfilesArgs, EvmAdapter,
        GetNameArgs,
    };
    use testcontainers::{
        core::{IntoContainerPort, WaitFor},
        runners::SyncRunner,
        Container, GenericImage, ImageExt,
    };

    /// Anvil default account 0. An EOA, so it has no code.
    const ANVIL_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    /// Spins up a Docker Anvil container and returns `(container, rpc_url)`.
    /// The container is dropped (and removed) when it goes out of scope.
    ///
    /// Anvil runs with the Mumbai chain ID so chain selection matches.
    fn start_anvil() -> (Container<GenericImage>, String) {
        let image = GenericImage::new("ghcr.io/foundry-rs/foundry", "latest")
            .with_exposed_port(8545.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_entrypoint("anvil")
            .with_cmd(vec![
                "--host".to_string(),
                "0.0.0.0".to_string(),
                "--port".to_string(),
                "8545".to_string(),
                "--chain-id".to_string(),
                "80001".to_string(),
            ]);

        let container = image.start().expect("Docker must be available to run Anvil tests");
        let host_port = container.get_host_port_ipv4(8545).expect("failed to get mapped port");
        let url = format!("http://127.0.0.1:{}", host_port);
        (container, url)
    }

    #[test]
    #[ignore]
    fn test_chain_id_matches_mumbai() {
        let (_anvil, anvil_url) = start_anvil();
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).expect("should connect to Anvil");
            assert_eq!(adapter.get_chain_id().await.unwrap(), 80001);
        });
    }

    #[test]
    #[ignore]
    fn test_name_of_account_without_code_is_undefined() {
        let (_anvil, anvil_url) = start_anvil();
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let args = GetNameArgs {
                config: ClientConfig::new("testnet").with_rpc_url(&anvil_url),
                profile_address: ANVIL_ACCOUNT.to_string(),
            };
            let err = get_name(&args).await.unwrap_err();
            assert_eq!(err, ReadError::Profile(ProfileError::NameUndefined));
        });
    }

    #[test]
    #[ignore]
    fn test_contract_profiles_empty_history() {
        let (_anvil, anvil_url) = start_anvil();
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            // A shared adapter passed as the client handle.
            let adapter = Arc::new(EvmAdapter::new(&anvil_url).unwrap());
            let args = ContractProfilesArgs {
                config: ClientConfig::new("mumbai").with_client(adapter),
                registry_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
                caller: ANVIL_ACCOUNT.to_string(),
                from_block: None,
            };
            let contracts = get_contract_profiles(&args).await.unwrap();
            assert!(contracts.is_empty());
        });
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let args = GetNameArgs {
                config: ClientConfig::new("polygon")
                    .with_rpc_url("http://127.0.0.1:1")
                    .with_timeout(Duration::from_secs(5)),
                profile_address: ANVIL_ACCOUNT.to_string(),
            };
            let err = get_name(&args).await.unwrap_err();
            assert!(matches!(
                err,
                ReadError::Network(NetworkError::Rpc(_) | NetworkError::Timeout(_))
            ));
        });
    }
}
