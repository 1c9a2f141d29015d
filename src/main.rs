mod cli;
mod cmd;
mod config;
mod fs;
mod schema;

use eyre::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = cli::start().await {
        eprintln!("Something went wrong: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
