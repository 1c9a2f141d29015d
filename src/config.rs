use std::collections::BTreeMap;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

pub mod giscus;

pub use giscus::GiscusConfig;

/// blog-config.toml file contents
///
/// Field names are the wire contract with the site generator, so the
/// serialized form keeps the original camelCase keys.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(rename = "siteUrl")]
    pub site_url: String,
    #[serde(rename = "useAbout")]
    pub use_about: bool,
    /// Link name -> URL or email address, consumer-defined keys
    pub links: BTreeMap<String, String>,
    pub giscus: GiscusConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::from("myunggon"),
            description: String::from("책장"),
            author: String::from("mason"),
            site_url: String::from("https://mudrhs1997.github.io/gatsby-starter-hoodie/"),
            use_about: true,
            links: BTreeMap::from([
                (
                    String::from("github"),
                    String::from("https://github.com/devHudi"),
                ),
                (String::from("medium"), String::from("https://medium.com")),
                (
                    String::from("email"),
                    String::from("mudrhs1997@naver.com"),
                ),
                (String::from("resume"), String::from("https://hudi.blog")),
                (String::from("link"), String::from("https://hudi.blog")),
            ]),
            giscus: GiscusConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Returns the built-in site configuration. Infallible, every field
    /// carries its canonical value.
    pub fn load() -> Self {
        Self::default()
    }

    /// Parse a configuration document. Missing fields fall back to the
    /// built-in values so the result is always fully populated.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("Failed to parse site configuration")
    }

    /// Read and parse a configuration file from disk.
    pub async fn read(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }
}
