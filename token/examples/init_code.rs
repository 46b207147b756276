use std::path::Path;

use zombie_token::{TokenArtifact, TokenDeployment, TOKEN_NAME, TOKEN_SYMBOL};

fn main() {
    let mut args = std::env::args();
    // Skip the program name
    args.next();
    let Some(artifact_path) = args.next() else {
        eprintln!("Usage: init_code <artifact_path>");
        std::process::exit(1);
    };

    // Parse the compiled artifact
    let artifact = TokenArtifact::from_path(Path::new(&artifact_path)).expect("load artifact");

    // Assemble the init code the deployer would submit
    let deployment = TokenDeployment::new(TOKEN_NAME.into(), TOKEN_SYMBOL.into());
    let init_code = deployment.init_code(&artifact).expect("assemble init code");

    println!("0x{}", hex::encode(init_code));
}
