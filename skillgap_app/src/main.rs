use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillgap_app::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    skillgap_app::init();

    let mut stdout = std::io::stdout().lock();
    cli::run(cli, &mut stdout).await?;
    Ok(())
}
