//! Store errors.

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Errors returned by [`TranslationStore`](super::TranslationStore) operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The name cannot identify a persisted resource
    #[error("Invalid language name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Which rule it breaks
        reason: &'static str,
    },

    /// The language is already in the store
    #[error("Language '{0}' already exists")]
    AlreadyExists(String),

    /// The language, or its persisted resource, does not exist
    #[error("Language '{0}' not found")]
    NotFound(String),

    /// Empty or whitespace-only key
    #[error("Localization key cannot be empty")]
    EmptyKey,

    /// Languages named in a multi-language write that do not exist.
    /// Every other language in the request was written.
    #[error("Languages not found: {}", .missing.join(", "))]
    PartialFailure {
        /// Unknown languages, in request order
        missing: Vec<String>,
    },

    /// The repository failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
