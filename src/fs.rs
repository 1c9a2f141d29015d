use std::path::{Path, PathBuf};

use eyre::Result;
use tokio::fs::{metadata, try_exists};

/// Site configuration file name
pub const CONFIG_FILE: &str = "blog-config.toml";

/// Find the site configuration file in the given directory and its parent
/// directories recursively
pub async fn find_config_file(start: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start.to_path_buf();

    loop {
        // Check if the file exists in the current directory first
        let path = current_dir.join(CONFIG_FILE);
        if try_exists(&path).await? && metadata(&path).await?.is_file() {
            return Ok(Some(path));
        }

        // Move to the parent directory if the file was not found
        match current_dir.parent() {
            Some(parent_dir) => current_dir = parent_dir.to_path_buf(),
            None => break, // Reached root directory
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/posts");
        tokio::fs::create_dir_all(&nested).await.unwrap();
        tokio::fs::write(dir.path().join(CONFIG_FILE), r#"title = "here""#)
            .await
            .unwrap();

        let found = find_config_file(&nested).await.unwrap();
        assert_eq!(found, Some(dir.path().join(CONFIG_FILE)));
    }

    #[tokio::test]
    async fn returns_none_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_config_file(dir.path()).await.unwrap();
        assert_eq!(found, None);
    }
}
