use colored::Colorize;
use comfy_table::Table;
use eyre::{bail, Result};
use tracing::debug;

use crate::config::SiteConfig;
use crate::fs;

/// Print the resolved site configuration, or the comments widget embed
/// snippet with `--embed`
pub async fn show(embed: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let Some(config_path) = fs::find_config_file(&current_dir).await? else {
        bail!(
            "{}: not in a Hoodie site directory",
            "Could not show the site configuration".bold()
        );
    };
    debug!(path = %config_path.display(), "Found site configuration");

    let config = SiteConfig::read(&config_path).await?;

    if embed {
        println!("{}", config.giscus.script_tag());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["title", config.title.as_str()]);
    table.add_row(vec!["description", config.description.as_str()]);
    table.add_row(vec!["author", config.author.as_str()]);
    table.add_row(vec!["siteUrl", config.site_url.as_str()]);
    table.add_row(vec![
        "useAbout",
        if config.use_about { "true" } else { "false" },
    ]);
    for (name, target) in &config.links {
        table.add_row(vec![format!("links.{}", name), target.clone()]);
    }
    let giscus = &config.giscus;
    table.add_row(vec!["giscus.repo", giscus.repo.as_str()]);
    table.add_row(vec!["giscus.repoId", giscus.repo_id.as_str()]);
    table.add_row(vec!["giscus.category", giscus.category.as_str()]);
    table.add_row(vec!["giscus.categoryId", giscus.category_id.as_str()]);
    table.add_row(vec!["giscus.mapping", giscus.mapping.as_str()]);
    table.add_row(vec!["giscus.strict", giscus.strict.as_str()]);
    table.add_row(vec!["giscus.reactionsEnabled", giscus.reactions_enabled.as_str()]);
    table.add_row(vec!["giscus.inputPosition", giscus.input_position.as_str()]);
    table.add_row(vec!["giscus.lang", giscus.lang.as_str()]);

    println!("{table}");

    Ok(())
}
