use std::path::Path;

use colored::Colorize;
use eyre::{bail, Result, WrapErr};
use indoc::formatdoc;
use tokio::fs;
use tracing::debug;

use crate::config::SiteConfig;
use crate::fs::CONFIG_FILE;

/// Scaffold a blog-config.toml seeded from the built-in configuration
pub async fn init(name: &str) -> Result<()> {
    let root = Path::new(name);
    let config_path = root.join(CONFIG_FILE);

    if fs::try_exists(&config_path).await? {
        // Get the canonical (absolute) path to the existing configuration
        let path = fs::canonicalize(&config_path).await?;
        bail!(
            "{}: {} already exists",
            "Could not initialize the site configuration".bold(),
            path.display()
        );
    }

    fs::create_dir_all(root).await?;

    let mut config = SiteConfig::load();
    if let Some(dir_name) = root.file_name() {
        config.title = dir_name.to_string_lossy().into_owned();
    }
    config.author = whoami::username();
    debug!(?config, "Scaffolding site configuration");

    let document = toml::to_string_pretty(&config)
        .wrap_err("Failed to serialize the site configuration")?;
    fs::write(&config_path, document)
        .await
        .wrap_err_with(|| format!("Failed to write {}", config_path.display()))?;

    let init_message = formatdoc!(
        r#"
        Your site configuration was created in {}

        Edit the title, links and giscus settings to match your site,
        then run 'hcfg check' to make sure everything is in place."#,
        config_path.display()
    );
    println!("{}", init_message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scaffolds_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my-blog");

        init(root.to_str().unwrap()).await.unwrap();

        let config = SiteConfig::read(&root.join(CONFIG_FILE)).await.unwrap();
        assert_eq!(config.title, "my-blog");
        assert_eq!(config.author, whoami::username());
        // Everything else keeps the built-in values
        assert_eq!(config.giscus, SiteConfig::load().giscus);
    }

    #[tokio::test]
    async fn refuses_to_overwrite_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my-blog");

        init(root.to_str().unwrap()).await.unwrap();
        assert!(init(root.to_str().unwrap()).await.is_err());
    }
}
