#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use optresolve::{cli, setup_logging, utils::ProcessEnv};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.options.debug)?;

    // Execute the appropriate command
    cli::execute_command(&args, &ProcessEnv, &mut std::io::stdout()).await
}
