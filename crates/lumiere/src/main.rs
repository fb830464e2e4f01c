//! Lumiere CLI binary.
//!
//! Manages story projects and drives their scenes through generation from the
//! command line.

use clap::Parser;
use lumiere::{LoggingConfig, LumiereConfig};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, dispatch};

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match LumiereConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.logging(), cli.verbose)?;

    if let Err(e) = dispatch(cli.command, &config).await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(not(feature = "observability"))]
fn init_tracing(logging: &LoggingConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(logging.level()))?
    };

    if *logging.json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[cfg(feature = "observability")]
fn init_tracing(logging: &LoggingConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    use lumiere::observability::{ObservabilityConfig, init_observability};

    let mut config = ObservabilityConfig::from_logging(logging);
    if verbose {
        config = config.with_log_level("debug");
    }
    init_observability(config)
}
