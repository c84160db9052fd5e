//! Settings types and their validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// One invalid setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "requiredLanguages[0]")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    /// Error for the setting at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure to produce usable settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file parsed but some settings are invalid
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The config file could not be read
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The config file is not valid JSON for [`StoreSettings`]
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.locale-store.json`; absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Directory holding one resource per language, relative to the workspace root.
    pub localization_dir: String,

    /// Appended to the language name to form the resource name
    /// (`French` + `Localization` → `FrenchLocalization.json`).
    pub resource_suffix: String,

    /// Languages that require translations.
    ///
    /// - `None`: All languages are required (default)
    /// - `Some([...])`: Only specified languages are required
    ///
    /// Mutually exclusive with `optional_languages`.
    pub required_languages: Option<Vec<String>>,

    /// Languages where missing translations are ignored.
    ///
    /// Mutually exclusive with `required_languages`.
    pub optional_languages: Option<Vec<String>>,
}

impl StoreSettings {
    /// Checks every setting, reporting all problems at once.
    ///
    /// # Errors
    /// - Required field is empty
    /// - Resource suffix would escape the localization directory
    /// - Both language lists are set
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.localization_dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "localizationDir",
                "The directory cannot be empty. Example: \"Localization\"",
            ));
        }

        if self.resource_suffix.is_empty() {
            errors.push(ValidationError::new(
                "resourceSuffix",
                "The suffix cannot be empty. Example: \"Localization\"",
            ));
        } else if self.resource_suffix.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "resourceSuffix",
                format!(
                    "Invalid suffix '{}': path separators are not allowed",
                    self.resource_suffix
                ),
            ));
        }

        for (field, languages) in [
            ("requiredLanguages", &self.required_languages),
            ("optionalLanguages", &self.optional_languages),
        ] {
            for (index, language) in languages.iter().flatten().enumerate() {
                if language.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        "Language names cannot be empty",
                    ));
                }
            }
        }

        if self.required_languages.is_some() && self.optional_languages.is_some() {
            errors.push(ValidationError::new(
                "requiredLanguages/optionalLanguages",
                "Cannot specify both 'requiredLanguages' and 'optionalLanguages'. \
                 Please use only one",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            localization_dir: "Localization".to_string(),
            resource_suffix: "Localization".to_string(),
            required_languages: None,
            optional_languages: None,
        }
    }
}
