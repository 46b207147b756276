use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use chrono::prelude::Utc;
use zombie_token::{load_token_artifact, TokenArtifact, TokenDeployment};

use crate::object::*;

const MAINNET_RPC_URL: &str = "https://eth.llamarpc.com";
const TESTNET_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";

pub(crate) fn generate_deployment_record_path(
    network: &str,
    contract_name: &str,
) -> eyre::Result<PathBuf> {
    let path = PathBuf::new().join("migration").join(network);
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path.join(format!("{contract_name}.json")))
}

pub fn save_deployment_record(path: &Path, record: DeploymentRecord) -> eyre::Result<()> {
    let mut records: Vec<DeploymentRecord> = if path.exists() {
        let content = fs::read(path)?;
        serde_json::from_slice(&content)?
    } else {
        Vec::new()
    };
    records.push(record);
    let new_content = serde_json::to_string_pretty(&records)?;
    fs::write(path, new_content)?;
    Ok(())
}

pub fn load_deployment_record(path: &Path) -> eyre::Result<DeploymentRecord> {
    let file = fs::File::open(path)?;
    let records: Vec<DeploymentRecord> = serde_json::from_reader(file)?;
    records.last().cloned().ok_or(eyre::eyre!("empty record"))
}

fn create_provider_from_network(
    network: &Network,
    account: PrivateKeySigner,
) -> eyre::Result<impl Provider> {
    let endpoint = match network {
        Network::Mainnet => MAINNET_RPC_URL.parse()?,
        Network::Testnet => TESTNET_RPC_URL.parse()?,
        Network::Custom(url) => url.clone(),
    };
    let wallet = EthereumWallet::from(account);
    Ok(ProviderBuilder::new().wallet(wallet).connect_http(endpoint))
}

async fn send_and_record_deployment<P: Provider>(
    provider: P,
    network: &Network,
    tx_record_path: PathBuf,
    contract_name: String,
    deployment: TokenDeployment,
    artifact: TokenArtifact,
    deployer_address: Address,
) -> eyre::Result<()> {
    let init_code = deployment.init_code(&artifact)?;
    let tx = TransactionRequest::default().with_deploy_code(init_code);
    let pending = provider.send_transaction(tx).await?;
    println!("Transaction hash: {}", pending.tx_hash());
    let receipt = pending.get_receipt().await?;
    let contract_address = receipt
        .contract_address
        .ok_or(eyre::eyre!("receipt carries no contract address"))?;
    println!("Contract address: {contract_address}");
    if deployment.publish_source {
        match network.explorer_url() {
            Some(explorer) => println!(
                "Source publication requested, verify {contract_name} at {explorer}/address/{contract_address}"
            ),
            None => println!("Source publication requested for {contract_name} at {contract_address}"),
        }
    }
    let deployment_record = DeploymentRecord {
        name: contract_name,
        date: Utc::now().to_rfc3339(),
        operation: "deploy".to_string(),
        token_name: deployment.token_name,
        token_symbol: deployment.token_symbol,
        metadata_uri: deployment.metadata_uri,
        tx_hash: hex::encode(receipt.transaction_hash),
        contract_address: contract_address.to_string(),
        deployer_address: deployer_address.to_string(),
        code_hash: Some(hex::encode(artifact.code_hash()?)),
        gas_used: receipt.gas_used,
        publish_source: deployment.publish_source,
        comment: None,
    };
    save_deployment_record(&tx_record_path, deployment_record)
}

async fn run_deployment(
    network: String,
    config_path: PathBuf,
    contract_name: String,
    deployment: TokenDeployment,
) -> eyre::Result<()> {
    let network: Network = network.try_into()?;
    let config = DeployerConfig::load(&config_path)?;
    let account = config.wallets.signing_account()?;
    let deployer_address = account.address();
    let artifact = load_token_artifact(&contract_name)?;
    let provider = create_provider_from_network(&network, account)?;
    let tx_record_path = generate_deployment_record_path(&network.to_string(), &contract_name)?;
    send_and_record_deployment(
        provider,
        &network,
        tx_record_path,
        contract_name,
        deployment,
        artifact,
        deployer_address,
    )
    .await
}

pub async fn deploy_token(
    network: String,
    config_path: PathBuf,
    contract_name: String,
    token_name: String,
    token_symbol: String,
) -> eyre::Result<()> {
    let deployment = TokenDeployment::new(token_name, token_symbol);
    run_deployment(network, config_path, contract_name, deployment).await
}

pub async fn deploy_token_with_metadata(
    network: String,
    config_path: PathBuf,
    contract_name: String,
    token_name: String,
    token_symbol: String,
    metadata_uri: String,
) -> eyre::Result<()> {
    let deployment = TokenDeployment::with_metadata(token_name, token_symbol, metadata_uri);
    run_deployment(network, config_path, contract_name, deployment).await
}
