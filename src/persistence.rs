//! Persistence of language tables, one resource per language.

/// JSON file repository
mod fs;
/// In-memory repository
mod memory;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

pub use fs::JsonFileRepository;
pub use memory::InMemoryRepository;

use crate::table::{
    Entry,
    LanguageTable,
};

/// Errors raised by a [`LanguageRepository`].
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// No resource exists for the language
    #[error("Localization resource for language '{0}' not found")]
    NotFound(String),

    /// A resource exists and would have been overwritten
    #[error("Localization resource for language '{0}' already exists")]
    AlreadyExists(String),

    /// Reading or writing the resource failed
    #[error("I/O error on localization resource '{name}': {source}")]
    Io {
        /// Language whose resource failed
        name: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The resource content is not a valid resource document
    #[error("Failed to parse localization resource '{name}': {source}")]
    Parse {
        /// Language whose resource is malformed
        name: String,
        /// Underlying failure
        #[source]
        source: serde_json::Error,
    },
}

/// Name-keyed access to persisted language tables.
///
/// Implementations must have flushed every write by the time a method
/// returns, so a following `load` observes it.
pub trait LanguageRepository {
    /// Names of all persisted languages, in a deterministic order.
    fn list_languages(&self) -> Result<Vec<String>, PersistenceError>;

    /// Reads the table stored for `name`.
    fn load(&self, name: &str) -> Result<LanguageTable, PersistenceError>;

    /// Creates an empty resource. Fails with `AlreadyExists` instead of
    /// overwriting.
    fn create(&mut self, name: &str) -> Result<(), PersistenceError>;

    /// Replaces the stored entries of an existing resource.
    fn save(&mut self, table: &LanguageTable) -> Result<(), PersistenceError>;

    /// Removes the resource of `name`.
    fn delete(&mut self, name: &str) -> Result<(), PersistenceError>;
}

/// On-disk shape of one language resource.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct LanguageResource {
    /// Entries in table order
    #[serde(default)]
    entries: Vec<Entry>,
}

impl LanguageResource {
    /// Snapshot of `table`'s entries.
    fn from_table(table: &LanguageTable) -> Self {
        Self { entries: table.entries().to_vec() }
    }

    /// Table named `name` holding these entries.
    fn into_table(self, name: &str) -> LanguageTable {
        LanguageTable::from_entries(name, self.entries)
    }
}
