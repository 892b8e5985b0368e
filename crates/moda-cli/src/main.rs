//! # moda CLI
//!
//! Entry point for the `moda` binary.
//!
//! Subcommands:
//! - `moda name`              — read a profile's display name
//! - `moda contract-profiles` — list profile contracts changed by an account
//! - `moda serve`             — start the HTTP API

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;

/// moda — on-chain profile reads for the music-drop storefront.
#[derive(Parser)]
#[command(name = "moda", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to config.yaml (default: ~/.moda/config.yaml).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Chain selector: polygon, mumbai, mainnet, testnet or a chain ID.
    #[arg(long, global = true, env = "MODA_CHAIN")]
    chain: Option<String>,

    /// JSON-RPC endpoint override.
    #[arg(long, global = true, env = "MODA_RPC_URL")]
    rpc_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the display name stored on a profile contract.
    Name {
        /// Profile contract address (0x...).
        #[arg(long)]
        address: String,
    },

    /// List the profile contracts an account has changed.
    ContractProfiles {
        /// Account address (0x...).
        #[arg(long)]
        caller: String,

        /// Profile registry address override.
        #[arg(long)]
        registry: Option<String>,

        /// First block to scan (default: config `profile_registry_from_block`, else genesis).
        #[arg(long)]
        from_block: Option<u64>,
    },

    /// Start the HTTP API.
    Serve {
        /// Address to bind (default: config `api_bind`, else 127.0.0.1:9200).
        #[arg(long, short)]
        addr: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Name { address } => commands::name::run(&cli.global, address).await,
        Commands::ContractProfiles {
            caller,
            registry,
            from_block,
        } => commands::contract_profiles::run(&cli.global, caller, registry, from_block).await,
        Commands::Serve { addr } => commands::serve::run(&cli.global, addr).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
