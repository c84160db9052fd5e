//! Repository that keeps resources in memory.

use indexmap::IndexMap;

use super::{
    LanguageRepository,
    PersistenceError,
};
use crate::table::{
    Entry,
    LanguageTable,
};

/// Keeps each language's entries in a map; listing follows creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    /// Entries per language, in creation order
    resources: IndexMap<String, Vec<Entry>>,
}

impl InMemoryRepository {
    /// Repository without any resources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a resource exists for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl LanguageRepository for InMemoryRepository {
    fn list_languages(&self) -> Result<Vec<String>, PersistenceError> {
        Ok(self.resources.keys().cloned().collect())
    }

    fn load(&self, name: &str) -> Result<LanguageTable, PersistenceError> {
        self.resources
            .get(name)
            .map(|entries| LanguageTable::from_entries(name, entries.iter().cloned()))
            .ok_or_else(|| PersistenceError::NotFound(name.to_string()))
    }

    fn create(&mut self, name: &str) -> Result<(), PersistenceError> {
        if self.resources.contains_key(name) {
            return Err(PersistenceError::AlreadyExists(name.to_string()));
        }
        self.resources.insert(name.to_string(), Vec::new());
        Ok(())
    }

    fn save(&mut self, table: &LanguageTable) -> Result<(), PersistenceError> {
        let entries = self
            .resources
            .get_mut(table.name())
            .ok_or_else(|| PersistenceError::NotFound(table.name().to_string()))?;
        *entries = table.entries().to_vec();
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<(), PersistenceError> {
        self.resources
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| PersistenceError::NotFound(name.to_string()))
    }
}
