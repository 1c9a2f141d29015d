use std::path::Path;

mod validator;

pub use validator::validate_config;

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    EmptyField(String),
    InvalidUrl {
        field: String,
        value: String,
    },
    InvalidEmail {
        field: String,
        value: String,
    },
    InvalidRepo {
        value: String,
    },
    InvalidFlag {
        field: String,
        value: String,
    },
    UnknownVariant {
        field: String,
        value: String,
        expected: &'static [&'static str],
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Empty value for field '{}'", field),
            Self::InvalidUrl { field, value } => {
                write!(f, "Invalid URL for field '{}': '{}'", field, value)
            }
            Self::InvalidEmail { field, value } => {
                write!(f, "Invalid email address for field '{}': '{}'", field, value)
            }
            Self::InvalidRepo { value } => write!(
                f,
                "Invalid value for field 'giscus.repo': expected 'owner/repo', got '{}'",
                value
            ),
            Self::InvalidFlag { field, value } => write!(
                f,
                "Invalid value for field '{}': expected \"0\" or \"1\", got '{}'",
                field, value
            ),
            Self::UnknownVariant {
                field,
                value,
                expected,
            } => write!(
                f,
                "Invalid value for field '{}': expected one of {:?}, got '{}'",
                field, expected, value
            ),
        }
    }
}

pub fn format_errors(file_path: &Path, errors: &[ValidationError], as_warnings: bool) -> String {
    let mut output = format!(
        "{}: Validation {} for '{}'\n",
        if as_warnings { "Warning" } else { "Error" },
        if as_warnings { "issues" } else { "failed" },
        file_path.display()
    );
    for error in errors {
        output.push_str(&format!("  → {}\n", error));
    }
    output
}
