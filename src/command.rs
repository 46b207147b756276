use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zombie_token::{CONTRACT_NAME, TOKEN_METADATA_URI, TOKEN_NAME, TOKEN_SYMBOL};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The network to deploy to, options are `mainnet`, `testnet`, `http://localhost:8545`
    #[arg(short, long, default_value_t = String::from("testnet"))]
    pub network: String,

    /// Deployer configuration file holding the signing key under `wallets.from_key`
    #[arg(short, long, default_value = "deployer.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the token contract with its name and symbol
    Deploy {
        /// Compiled contract name in `build/contracts` directory
        #[arg(long, default_value_t = String::from(CONTRACT_NAME))]
        contract_name: String,
        /// Token name handed to the contract constructor
        #[arg(long, default_value_t = String::from(TOKEN_NAME))]
        token_name: String,
        /// Token symbol handed to the contract constructor
        #[arg(long, default_value_t = String::from(TOKEN_SYMBOL))]
        token_symbol: String,
    },
    /// Deploy the token contract with a link to its off-chain metadata
    DeployWithMetadata {
        /// Compiled contract name in `build/contracts` directory
        #[arg(long, default_value_t = String::from(CONTRACT_NAME))]
        contract_name: String,
        /// Token name handed to the contract constructor
        #[arg(long, default_value_t = String::from(TOKEN_NAME))]
        token_name: String,
        /// Token symbol handed to the contract constructor
        #[arg(long, default_value_t = String::from(TOKEN_SYMBOL))]
        token_symbol: String,
        /// Gateway link to the off-chain token metadata
        #[arg(long, default_value_t = String::from(TOKEN_METADATA_URI))]
        metadata_uri: String,
    },
}
