use std::{fmt::Display, fs, path::Path};

use alloy::signers::local::PrivateKeySigner;
use url::Url;

#[derive(PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Custom(Url),
}

impl Network {
    /// Block explorer the deployed contract can be verified on, if one is known
    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            Network::Mainnet => Some("https://etherscan.io"),
            Network::Testnet => Some("https://sepolia.etherscan.io"),
            Network::Custom(_) => None,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Custom(url) => write!(f, "{}", url),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = eyre::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Ok(Network::Custom(value.parse()?)),
        }
    }
}

/// Deployer configuration, read once at startup and passed through explicitly
#[derive(serde::Deserialize)]
pub struct DeployerConfig {
    pub wallets: WalletsConfig,
}

#[derive(serde::Deserialize)]
pub struct WalletsConfig {
    pub from_key: String,
}

impl DeployerConfig {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("{e}:{}", path.to_string_lossy()))?;
        Ok(toml::from_str(&content)?)
    }
}

impl WalletsConfig {
    /// Resolve the signing account that authorizes and pays for the deployment
    pub fn signing_account(&self) -> eyre::Result<PrivateKeySigner> {
        self.from_key
            .parse::<PrivateKeySigner>()
            .map_err(|e| eyre::eyre!("invalid wallets.from_key: {e}"))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone)]
pub struct DeploymentRecord {
    pub name: String,
    pub date: String,
    pub operation: String,
    pub token_name: String,
    pub token_symbol: String,
    pub metadata_uri: Option<String>,
    pub tx_hash: String,
    pub contract_address: String,
    pub deployer_address: String,
    pub code_hash: Option<String>,
    pub gas_used: u64,
    pub publish_source: bool,
    // This field is not required, so you can edit in your <contract>.json file to add comment for cooperations
    #[serde(default)]
    pub comment: Option<String>,
}
