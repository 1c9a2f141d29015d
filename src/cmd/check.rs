use colored::Colorize;
use eyre::{bail, Result};
use tracing::{debug, info, instrument};

use crate::config::SiteConfig;
use crate::{fs, schema};

/// Validate the site configuration against the generator and widget contract
#[instrument]
pub async fn check() -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let Some(config_path) = fs::find_config_file(&current_dir).await? else {
        bail!(
            "{}: not in a Hoodie site directory",
            "Could not check the site configuration".bold()
        );
    };
    debug!(path = %config_path.display(), "Found site configuration");

    let config = SiteConfig::read(&config_path).await?;
    debug!(?config, "Loaded site configuration");

    let errors = schema::validate_config(&config);
    if !errors.is_empty() {
        eprintln!("{}", schema::format_errors(&config_path, &errors, false));
        bail!(
            "{}: found {} validation error(s)",
            "Invalid site configuration".bold(),
            errors.len()
        );
    }

    info!("Site configuration is valid: {}", config_path.display());
    Ok(())
}
