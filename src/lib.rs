mod command;
mod handle;
mod object;

pub use handle::{load_deployment_record, save_deployment_record};
pub use object::{DeployerConfig, DeploymentRecord, Network, WalletsConfig};

/// Load the latest token deployment record from the local migration directory
pub fn load_latest_token_deployment(
    network: Network,
    contract_name: &str,
) -> eyre::Result<DeploymentRecord> {
    let path = handle::generate_deployment_record_path(&network.to_string(), contract_name)?;
    handle::load_deployment_record(&path)
}
