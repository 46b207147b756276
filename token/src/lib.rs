use std::{fs, path::Path};

use alloy::primitives::{keccak256, Bytes, B256};

mod deployment;
pub use deployment::TokenDeployment;

pub const CONTRACT_NAME: &str = "Zombie";
pub const TOKEN_NAME: &str = "Zombie Token";
pub const TOKEN_SYMBOL: &str = "ZTK";
pub const TOKEN_METADATA_URI: &str =
    "https://gateway.pinata.cloud/ipfs/QmcsDmVCWiLDHKzAzC6No13SeJNyBXPzVPvaug5Q2NFJoX/";

/// Compiled contract artifact emitted by the contract toolchain into `build/contracts`
#[derive(serde::Deserialize, Clone)]
pub struct TokenArtifact {
    #[serde(rename = "contractName", default)]
    pub contract_name: Option<String>,
    bytecode: String,
}

impl TokenArtifact {
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        let content =
            fs::read(path).map_err(|e| eyre::eyre!("{e}:{}", path.to_string_lossy()))?;
        let artifact: TokenArtifact = serde_json::from_slice(&content)?;
        artifact.creation_code()?;
        Ok(artifact)
    }

    /// Creation bytecode without constructor arguments
    pub fn creation_code(&self) -> eyre::Result<Bytes> {
        let raw = self.bytecode.trim_start_matches("0x");
        let bytes =
            hex::decode(raw).map_err(|e| eyre::eyre!("malformed bytecode in artifact: {e}"))?;
        if bytes.is_empty() {
            return Err(eyre::eyre!("artifact holds no creation bytecode"));
        }
        Ok(bytes.into())
    }

    pub fn code_hash(&self) -> eyre::Result<B256> {
        Ok(keccak256(self.creation_code()?))
    }
}

/// Load a compiled contract artifact from the local `build/contracts` directory
pub fn load_token_artifact(contract_name: &str) -> eyre::Result<TokenArtifact> {
    let path = Path::new("build/contracts").join(format!("{contract_name}.json"));
    TokenArtifact::from_path(&path)
}
