//! Missing-translation detection across languages.

use crate::config::StoreSettings;

/// Which languages must carry every defined key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguagePolicy {
    /// Every language in the store.
    #[default]
    All,
    /// Only the listed languages.
    Required(Vec<String>),
    /// Every language except the listed ones.
    Optional(Vec<String>),
}

impl LanguagePolicy {
    /// Policy described by `requiredLanguages` / `optionalLanguages`.
    #[must_use]
    pub fn from_settings(settings: &StoreSettings) -> Self {
        match (&settings.required_languages, &settings.optional_languages) {
            (Some(required), _) => Self::Required(required.clone()),
            (None, Some(optional)) => Self::Optional(optional.clone()),
            (None, None) => Self::All,
        }
    }

    /// Whether `language` must translate every defined key.
    #[must_use]
    pub fn requires(&self, language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Required(required) => required.iter().any(|l| l == language),
            Self::Optional(optional) => !optional.iter().any(|l| l == language),
        }
    }
}

/// A defined key lacking a translation in one or more required languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    /// Incomplete key
    pub key: String,
    /// Required languages without a non-empty translation, in store order
    pub missing_languages: Vec<String>,
}
