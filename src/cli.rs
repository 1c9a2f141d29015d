use clap::{Parser, Subcommand};
use eyre::Result;

use crate::cmd;

#[derive(Parser)]
#[command(
    author = "mason",
    version,
    disable_version_flag = true,
    about = "Site configuration manager for Hoodie blogs"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Scaffold a blog-config.toml for a new site
    Init {
        /// Site directory name
        name: String,
    },
    /// Validate the site configuration
    Check,
    /// Print the resolved site configuration
    Show {
        /// Print the comments widget embed snippet instead
        #[arg(long)]
        embed: bool,
    },
}

pub async fn start() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { name } => cmd::init(name).await?,
        Commands::Check => cmd::check().await?,
        Commands::Show { embed } => cmd::show(*embed).await?,
    }

    Ok(())
}
