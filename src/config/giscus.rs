use indoc::formatdoc;
use serde::{Deserialize, Serialize};

/// Page-to-discussion mapping modes understood by the widget script
pub const MAPPINGS: &[&str] = &["pathname", "url", "title", "og:title", "specific", "number"];

/// Comment box placements understood by the widget script
pub const INPUT_POSITIONS: &[&str] = &["top", "bottom"];

/// Boolean options are string-encoded on the wire
pub const FLAGS: &[&str] = &["0", "1"];

/// giscus comments widget settings, see https://giscus.app/
///
/// Every value stays a string with the exact encoding the embed script
/// expects, including the "0"/"1" booleans.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GiscusConfig {
    pub repo: String,
    #[serde(rename = "repoId")]
    pub repo_id: String,
    pub category: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub mapping: String,
    pub strict: String,
    #[serde(rename = "reactionsEnabled")]
    pub reactions_enabled: String,
    #[serde(rename = "inputPosition")]
    pub input_position: String,
    pub lang: String,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            repo: String::from("devHudi/gatsby-starter-hoodie"),
            repo_id: String::from("MDEwOlJlcG9zaXRvcnkzNjk4NjMzNTg="),
            category: String::from("Comments"),
            category_id: String::from("DIC_kwDOFguqvs4ChwGy"),
            mapping: String::from("pathname"),
            strict: String::from("0"),
            reactions_enabled: String::from("1"),
            input_position: String::from("bottom"),
            lang: String::from("en"),
        }
    }
}

impl GiscusConfig {
    /// The `data-*` attribute pairs consumed by the widget script, in the
    /// order https://giscus.app/ emits them
    pub fn embed_attributes(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("data-repo", self.repo.as_str()),
            ("data-repo-id", self.repo_id.as_str()),
            ("data-category", self.category.as_str()),
            ("data-category-id", self.category_id.as_str()),
            ("data-mapping", self.mapping.as_str()),
            ("data-strict", self.strict.as_str()),
            ("data-reactions-enabled", self.reactions_enabled.as_str()),
            ("data-input-position", self.input_position.as_str()),
            ("data-lang", self.lang.as_str()),
        ]
    }

    /// Render the embed snippet for the comments widget
    pub fn script_tag(&self) -> String {
        let attributes = self
            .embed_attributes()
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}=\"{}\"",
                    name,
                    html_escape::encode_double_quoted_attribute(value)
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ");

        formatdoc!(
            r#"
            <script src="https://giscus.app/client.js"
                    {}
                    crossorigin="anonymous"
                    async>
            </script>"#,
            attributes
        )
    }
}
