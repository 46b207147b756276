use alloy::{primitives::Bytes, sol_types::SolValue};

use crate::TokenArtifact;

/// A single token deployment, constructor arguments plus the source-publication request
#[derive(Clone)]
pub struct TokenDeployment {
    pub token_name: String,
    pub token_symbol: String,
    pub metadata_uri: Option<String>,
    pub publish_source: bool,
}

impl TokenDeployment {
    pub fn new(token_name: String, token_symbol: String) -> Self {
        Self {
            token_name,
            token_symbol,
            metadata_uri: None,
            publish_source: true,
        }
    }

    pub fn with_metadata(token_name: String, token_symbol: String, metadata_uri: String) -> Self {
        Self {
            token_name,
            token_symbol,
            metadata_uri: Some(metadata_uri),
            publish_source: true,
        }
    }

    pub fn constructor_arity(&self) -> usize {
        if self.metadata_uri.is_some() {
            3
        } else {
            2
        }
    }

    /// ABI-encoded constructor arguments, in constructor declaration order
    pub fn constructor_args(&self) -> Vec<u8> {
        match &self.metadata_uri {
            Some(uri) => (
                self.token_name.as_str(),
                self.token_symbol.as_str(),
                uri.as_str(),
            )
                .abi_encode_params(),
            None => (self.token_name.as_str(), self.token_symbol.as_str()).abi_encode_params(),
        }
    }

    /// Creation bytecode with the encoded constructor arguments appended
    pub fn init_code(&self, artifact: &TokenArtifact) -> eyre::Result<Bytes> {
        let code = artifact.creation_code()?;
        Ok([code.to_vec(), self.constructor_args()].concat().into())
    }
}
