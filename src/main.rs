//! Fuji weather dapp CLI.
//!
//! Inspects the built-in configuration and brings up a Robonomics client
//! against an in-process IPFS node.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;

use fuji_weather::blockchain::{BlockchainClient, Wallet};
use fuji_weather::config::loader::{load_or_default, ConfigError};
use fuji_weather::config::validation::validate_config;
use fuji_weather::config::{ACTION, MODEL_TRADE, OBJECTIVE_TRADE, RUN};
use fuji_weather::observability::logging::init_logging;
use fuji_weather::robonomics::{LocalIpfs, RobonomicsContext};
use fuji_weather::DappConfig;

#[derive(Parser)]
#[command(name = "fuji-weather")]
#[command(about = "Fuji weather dapp configuration and Robonomics client", long_about = None)]
struct Cli {
    /// TOML file overriding the built-in configuration.
    #[arg(short, long, env = "FUJI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the network profile for a chain id
    Profile {
        #[arg(short, long)]
        network: Option<u64>,
    },
    /// Print the IPFS node options
    IpfsConfig,
    /// Print the trade, run and action model descriptors
    Models,
    /// Validate the configuration
    Validate,
    /// Initialize a Robonomics client using the wallet from the environment
    Connect {
        #[arg(short, long, conflicts_with = "detect")]
        network: Option<u64>,
        /// Ask the RPC endpoint for the chain id
        #[arg(long)]
        detect: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // Validation is reported by the `validate` command itself.
    let config: DappConfig = match cli.command {
        Commands::Validate => match &cli.config {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => Default::default(),
        },
        _ => load_or_default(cli.config.as_deref())?,
    };

    init_logging(&config.observability)?;
    tracing::debug!(network_id = config.network_id, "Configuration loaded");

    match cli.command {
        Commands::Profile { network } => {
            let profile = config.profiles().get(network.unwrap_or(config.network_id))?.clone();
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::IpfsConfig => {
            println!("{}", serde_json::to_string_pretty(&config.ipfs.to_json())?);
        }
        Commands::Models => {
            let models = json!({
                "trade": { "model": MODEL_TRADE, "objective": OBJECTIVE_TRADE },
                "run": RUN,
                "action": ACTION,
            });
            println!("{}", serde_json::to_string_pretty(&models)?);
        }
        Commands::Validate => match validate_config(&config) {
            Ok(()) => println!("Configuration OK"),
            Err(errors) => return Err(ConfigError::Validation(errors).into()),
        },
        Commands::Connect { network, detect } => {
            let network_id = if detect {
                let rpc = BlockchainClient::new(config.blockchain.clone())?;
                let chain_id = rpc.get_chain_id().await?;
                tracing::info!(chain_id = chain_id.0, "Detected network");
                chain_id.0
            } else {
                network.unwrap_or(config.network_id)
            };

            let wallet = Wallet::from_env()?;
            let ipfs = Arc::new(LocalIpfs::new(format!("local:{}", config.ipfs.repo)));
            let context = RobonomicsContext::from_config(&config);
            let client = context.initialize(&wallet, ipfs, network_id)?;

            let summary = json!({
                "network_id": client.network_id(),
                "account": client.account().to_string(),
                "ens": client.ens(),
                "lighthouse": client.lighthouse(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
