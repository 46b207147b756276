use clap::Parser;

mod command;
mod handle;
mod object;

use command::{Cli, Commands};
use handle::*;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Deploy {
            contract_name,
            token_name,
            token_symbol,
        } => {
            deploy_token(
                cli.network,
                cli.config,
                contract_name,
                token_name,
                token_symbol,
            )
            .await
        }
        Commands::DeployWithMetadata {
            contract_name,
            token_name,
            token_symbol,
            metadata_uri,
        } => {
            deploy_token_with_metadata(
                cli.network,
                cli.config,
                contract_name,
                token_name,
                token_symbol,
                metadata_uri,
            )
            .await
        }
    }
}
