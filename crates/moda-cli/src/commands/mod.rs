//! CLI subcommand implementations.

use std::collections::HashMap;
use std::path::PathBuf;

use moda_core::config::{Config, ResolvedEndpoint, DEFAULT_API_BIND, DEFAULT_REQUEST_TIMEOUT_SECS};

use crate::GlobalArgs;

pub mod contract_profiles;
pub mod name;
pub mod serve;

/// Chain used when there is no config file.
const FALLBACK_CHAIN: &str = "polygon";

/// Resolve the config path (default: ~/.moda/config.yaml).
fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = config {
        return Ok(path);
    }

    let home = dirs::home_dir().ok_or("could not determine home directory")?;
    Ok(home.join(".moda").join("config.yaml"))
}

/// Loads the config file.
///
/// A missing default config is not an error: flags and environment alone can
/// describe the endpoint. A missing explicit `--config` is.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let explicit = global.config.is_some();
    let path = resolve_config_path(global.config.clone())?;

    if !explicit && !path.exists() {
        tracing::debug!("no config at {}, using flags only", path.display());
        return Ok(Config {
            default_chain: FALLBACK_CHAIN.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            api_bind: DEFAULT_API_BIND.to_string(),
            chains: HashMap::new(),
        });
    }

    tracing::info!("loading config from {}", path.display());
    Ok(Config::from_file(&path)?)
}

/// Loads the config and applies `--chain` / `--rpc-url`.
pub(crate) fn resolve_endpoint(
    global: &GlobalArgs,
) -> Result<(Config, ResolvedEndpoint), Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let endpoint = config.resolve(global.chain.as_deref(), global.rpc_url.as_deref());
    Ok((config, endpoint))
}
