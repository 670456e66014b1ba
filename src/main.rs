use anyhow::Result;
use branch_sweep::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let mut config = Config::from_args(&args)?;

    // Run the sweep pipeline
    cli::execute_command(&mut config)
}
