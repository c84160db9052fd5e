//! Helpers shared by the unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::cell::Cell;

use crate::persistence::{
    InMemoryRepository,
    LanguageRepository,
    PersistenceError,
};
use crate::store::{
    TranslationStore,
    Translations,
};
use crate::table::LanguageTable;

/// Builds an in-memory store with the given languages and entries.
///
/// # Arguments
/// * `languages` - `(language, [(key, translation)])` in creation order
pub(crate) fn create_store(
    languages: &[(&str, &[(&str, &str)])],
) -> TranslationStore<InMemoryRepository> {
    let mut store = TranslationStore::new(InMemoryRepository::new());
    for (language, entries) in languages {
        store.create_language(language).unwrap();
        for (key, translation) in *entries {
            store.update_translations(key, &translations(&[(*language, *translation)])).unwrap();
        }
    }
    store
}

/// Builds a language → translation map, keeping the given order.
pub(crate) fn translations(pairs: &[(&str, &str)]) -> Translations {
    pairs
        .iter()
        .map(|(language, translation)| ((*language).to_string(), (*translation).to_string()))
        .collect()
}

/// In-memory repository with switchable failures.
#[derive(Debug, Default)]
pub(crate) struct FailingRepository {
    /// Backing storage
    inner: InMemoryRepository,
    /// Saves still allowed before every save fails; `None` never fails
    saves_left: Cell<Option<usize>>,
    /// Whether `delete` reports the resource as already gone
    resources_gone: Cell<bool>,
}

impl FailingRepository {
    /// Every following save fails.
    pub(crate) fn fail_saves(&self) {
        self.fail_saves_after(0);
    }

    /// The next `count` saves succeed, every one after fails.
    pub(crate) fn fail_saves_after(&self, count: usize) {
        self.saves_left.set(Some(count));
    }

    /// `delete` fails with `NotFound` from now on, as if the resource had
    /// been removed behind the store's back.
    pub(crate) fn lose_resources(&self) {
        self.resources_gone.set(true);
    }
}

impl LanguageRepository for FailingRepository {
    fn list_languages(&self) -> Result<Vec<String>, PersistenceError> {
        self.inner.list_languages()
    }

    fn load(&self, name: &str) -> Result<LanguageTable, PersistenceError> {
        self.inner.load(name)
    }

    fn create(&mut self, name: &str) -> Result<(), PersistenceError> {
        self.inner.create(name)
    }

    fn save(&mut self, table: &LanguageTable) -> Result<(), PersistenceError> {
        match self.saves_left.get() {
            Some(0) => {
                return Err(PersistenceError::Io {
                    name: table.name().to_string(),
                    source: std::io::Error::other("disk full"),
                });
            }
            Some(left) => self.saves_left.set(Some(left - 1)),
            None => {}
        }
        self.inner.save(table)
    }

    fn delete(&mut self, name: &str) -> Result<(), PersistenceError> {
        if self.resources_gone.get() {
            return Err(PersistenceError::NotFound(name.to_string()));
        }
        self.inner.delete(name)
    }
}
