use regex::Regex;

use crate::config::giscus::{FLAGS, INPUT_POSITIONS, MAPPINGS};
use crate::config::SiteConfig;
use crate::schema::ValidationError;

const URL_PATTERN: &str = r"^https?://\S+$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const REPO_PATTERN: &str = r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$";

/// Checks a configuration record against the contract expected by the
/// site generator and the comments widget. Collects every violation
/// instead of failing on the first one.
pub fn validate_config(config: &SiteConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let url_re = Regex::new(URL_PATTERN).unwrap();
    let email_re = Regex::new(EMAIL_PATTERN).unwrap();
    let repo_re = Regex::new(REPO_PATTERN).unwrap();

    let giscus = &config.giscus;
    let fields = [
        ("title", &config.title),
        ("description", &config.description),
        ("author", &config.author),
        ("siteUrl", &config.site_url),
        ("giscus.repo", &giscus.repo),
        ("giscus.repoId", &giscus.repo_id),
        ("giscus.category", &giscus.category),
        ("giscus.categoryId", &giscus.category_id),
        ("giscus.mapping", &giscus.mapping),
        ("giscus.strict", &giscus.strict),
        ("giscus.reactionsEnabled", &giscus.reactions_enabled),
        ("giscus.inputPosition", &giscus.input_position),
        ("giscus.lang", &giscus.lang),
    ];

    // Every declared field must carry a value
    for (field, value) in fields {
        if value.is_empty() {
            errors.push(ValidationError::EmptyField(field.to_string()));
        }
    }

    if !config.site_url.is_empty() && !url_re.is_match(&config.site_url) {
        errors.push(ValidationError::InvalidUrl {
            field: String::from("siteUrl"),
            value: config.site_url.clone(),
        });
    }

    // The 'email' entry is an address, every other link is a URL
    for (name, target) in &config.links {
        let field = format!("links.{}", name);
        if target.is_empty() {
            errors.push(ValidationError::EmptyField(field));
        } else if name == "email" {
            if !email_re.is_match(target) {
                errors.push(ValidationError::InvalidEmail {
                    field,
                    value: target.clone(),
                });
            }
        } else if !url_re.is_match(target) {
            errors.push(ValidationError::InvalidUrl {
                field,
                value: target.clone(),
            });
        }
    }

    if !giscus.repo.is_empty() && !repo_re.is_match(&giscus.repo) {
        errors.push(ValidationError::InvalidRepo {
            value: giscus.repo.clone(),
        });
    }

    for (field, value) in [
        ("giscus.strict", &giscus.strict),
        ("giscus.reactionsEnabled", &giscus.reactions_enabled),
    ] {
        if !value.is_empty() && !FLAGS.contains(&value.as_str()) {
            errors.push(ValidationError::InvalidFlag {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }

    if !giscus.mapping.is_empty() && !MAPPINGS.contains(&giscus.mapping.as_str()) {
        errors.push(ValidationError::UnknownVariant {
            field: String::from("giscus.mapping"),
            value: giscus.mapping.clone(),
            expected: MAPPINGS,
        });
    }
    if !giscus.input_position.is_empty() && !INPUT_POSITIONS.contains(&giscus.input_position.as_str())
    {
        errors.push(ValidationError::UnknownVariant {
            field: String::from("giscus.inputPosition"),
            value: giscus.input_position.clone(),
            expected: INPUT_POSITIONS,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_configuration_is_valid() {
        assert!(validate_config(&SiteConfig::load()).is_empty());
    }

    #[test]
    fn rejects_empty_fields() {
        let mut config = SiteConfig::load();
        config.title = String::new();

        let errors = validate_config(&config);
        assert!(errors.contains(&ValidationError::EmptyField(String::from("title"))));
    }

    #[test]
    fn rejects_malformed_site_url() {
        let mut config = SiteConfig::load();
        config.site_url = String::from("not a url");

        let errors = validate_config(&config);
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidUrl { field, .. }] if field == "siteUrl"
        ));
    }

    #[test]
    fn rejects_malformed_link_targets() {
        let mut config = SiteConfig::load();
        config
            .links
            .insert(String::from("email"), String::from("not-an-address"));
        config
            .links
            .insert(String::from("resume"), String::from("ftp://hudi.blog"));

        let errors = validate_config(&config);
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::InvalidEmail { field, .. } if field == "links.email")
        ));
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::InvalidUrl { field, .. } if field == "links.resume")
        ));
    }

    #[test]
    fn rejects_repo_without_owner() {
        let mut config = SiteConfig::load();
        config.giscus.repo = String::from("gatsby-starter-hoodie");

        let errors = validate_config(&config);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidRepo { .. })));
    }

    #[test]
    fn rejects_non_string_encoded_flags() {
        let mut config = SiteConfig::load();
        config.giscus.strict = String::from("true");

        let errors = validate_config(&config);
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::InvalidFlag { field, .. } if field == "giscus.strict")
        ));
    }

    #[test]
    fn rejects_unknown_enum_variants() {
        let mut config = SiteConfig::load();
        config.giscus.mapping = String::from("slug");
        config.giscus.input_position = String::from("middle");

        let errors = validate_config(&config);
        assert_eq!(
            errors
                .iter()
                .filter(|e| matches!(e, ValidationError::UnknownVariant { .. }))
                .count(),
            2
        );
    }
}
