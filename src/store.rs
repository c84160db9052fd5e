//! The collection of all language tables and the cross-language operations.

/// Missing-translation detection
mod coverage;
/// Store errors
mod error;

use indexmap::{
    IndexMap,
    IndexSet,
};

pub use coverage::{
    LanguagePolicy,
    MissingTranslation,
};
pub use error::StoreError;

use crate::persistence::{
    LanguageRepository,
    PersistenceError,
};
use crate::table::{
    Entry,
    LanguageTable,
};

/// Language name → translation, in request or store order.
pub type Translations = IndexMap<String, String>;

/// Result of [`TranslationStore::fetch_translations`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedTranslations {
    /// At least one language has an entry for the key.
    pub found: bool,
    /// Translation per language holding the key, in store order
    pub translations: Translations,
}

/// One match of a store-wide search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Language the entry belongs to
    pub language: &'a str,
    /// Matching entry
    pub entry: &'a Entry,
}

/// Owns every [`LanguageTable`] and keeps them in sync with a repository.
///
/// Each mutation is persisted before it becomes visible: the table is
/// updated on a copy, saved, then committed.
#[derive(Debug)]
pub struct TranslationStore<R> {
    /// Where every table is persisted
    repository: R,
    /// Tables by language, in creation or listing order
    languages: IndexMap<String, LanguageTable>,
}

/// Rejects names that cannot identify a persisted resource.
fn validate_language_name(name: &str) -> Result<(), StoreError> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name.contains(['/', '\\']) {
        Some("path separators are not allowed")
    } else if name == "." || name == ".." {
        Some("relative path components are not allowed")
    } else if name.chars().any(char::is_control) {
        Some("control characters are not allowed")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| Err(StoreError::InvalidName { name: name.to_string(), reason }))
}

/// Rejects empty and whitespace-only keys.
fn ensure_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        tracing::warn!("Localization key cannot be empty.");
        return Err(StoreError::EmptyKey);
    }
    Ok(())
}

impl<R: LanguageRepository> TranslationStore<R> {
    /// Empty store over `repository`, without loading anything from it.
    pub fn new(repository: R) -> Self {
        Self { repository, languages: IndexMap::new() }
    }

    /// Loads every language the repository lists.
    pub fn open(repository: R) -> Result<Self, StoreError> {
        let mut store = Self::new(repository);
        for name in store.repository.list_languages()? {
            let table = store.repository.load(&name)?;
            tracing::debug!("Loaded language '{}' with {} entries", name, table.len());
            store.languages.insert(name, table);
        }
        Ok(store)
    }

    /// Backing repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Language names in listing order.
    #[must_use]
    pub fn list_language_names(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    /// Table of `name`, if it exists.
    #[must_use]
    pub fn language(&self, name: &str) -> Option<&LanguageTable> {
        self.languages.get(name)
    }

    /// Whether `name` is in the store.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Adds an empty language and creates its resource.
    pub fn create_language(&mut self, name: &str) -> Result<(), StoreError> {
        validate_language_name(name)?;
        if self.languages.contains_key(name) {
            tracing::warn!("Localization for language '{}' already exists.", name);
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        self.repository.create(name).map_err(|e| match e {
            PersistenceError::AlreadyExists(name) => StoreError::AlreadyExists(name),
            other => StoreError::Persistence(other),
        })?;
        self.languages.insert(name.to_string(), LanguageTable::new(name));

        tracing::info!("Created new localization for language: {}", name);
        Ok(())
    }

    /// Removes a language and its resource.
    ///
    /// A language whose resource has already disappeared is still dropped
    /// from the store, but the call reports [`StoreError::NotFound`].
    pub fn delete_language(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.languages.contains_key(name) {
            tracing::error!("Localization for language '{}' not found.", name);
            return Err(StoreError::NotFound(name.to_string()));
        }

        match self.repository.delete(name) {
            Ok(()) => {}
            Err(PersistenceError::NotFound(_)) => {
                tracing::error!("Localization file for language '{}' not found.", name);
                self.languages.shift_remove(name);
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
        self.languages.shift_remove(name);

        tracing::info!("Deleted localization for language: {}", name);
        Ok(())
    }

    /// Adds `key` to every language in `translations` with a non-empty value.
    ///
    /// Empty values are skipped, never written. Languages that do not exist
    /// are reported through [`StoreError::PartialFailure`] after the others
    /// have been written.
    pub fn set_translations(
        &mut self,
        key: &str,
        translations: &Translations,
    ) -> Result<(), StoreError> {
        ensure_key(key)?;

        let mut missing = Vec::new();
        for (language, translation) in translations {
            if translation.is_empty() {
                continue;
            }
            if !self.languages.contains_key(language) {
                tracing::error!("Localization for language '{}' not found.", language);
                missing.push(language.clone());
                continue;
            }
            self.write(language, |table| table.add_or_update(key, translation.as_str()))?;
            tracing::info!("Added localization for key '{}' in language '{}'.", key, language);
        }

        if missing.is_empty() { Ok(()) } else { Err(StoreError::PartialFailure { missing }) }
    }

    /// Every language's translation of `key`.
    #[must_use]
    pub fn fetch_translations(&self, key: &str) -> FetchedTranslations {
        let translations: Translations = self
            .languages
            .iter()
            .filter_map(|(language, table)| {
                table.find(key).map(|entry| (language.clone(), entry.translation.clone()))
            })
            .collect();

        FetchedTranslations { found: !translations.is_empty(), translations }
    }

    /// Writes every value in `translations`, empty ones included.
    ///
    /// Languages missing from the map are left untouched; languages missing
    /// from the store are skipped.
    pub fn update_translations(
        &mut self,
        key: &str,
        translations: &Translations,
    ) -> Result<(), StoreError> {
        ensure_key(key)?;

        for (language, translation) in translations {
            if !self.languages.contains_key(language) {
                tracing::warn!("Skipping unknown language '{}' for key '{}'", language, key);
                continue;
            }
            self.write(language, |table| table.add_or_update(key, translation.as_str()))?;
        }

        tracing::info!("Updated translations for key '{}'.", key);
        Ok(())
    }

    /// Removes `key` from every language, returning the languages that had it.
    pub fn remove_key(&mut self, key: &str) -> Result<Vec<String>, StoreError> {
        ensure_key(key)?;

        let holders: Vec<String> = self
            .languages
            .iter()
            .filter(|(_, table)| table.find(key).is_some())
            .map(|(language, _)| language.clone())
            .collect();

        for language in &holders {
            self.write(language, |table| {
                table.remove(key);
            })?;
        }

        tracing::info!("Removed key '{}' from {} languages", key, holders.len());
        Ok(holders)
    }

    /// Entries matching `term` in one language, or in all of them.
    pub fn search(
        &self,
        term: &str,
        language: Option<&str>,
    ) -> Result<Vec<SearchHit<'_>>, StoreError> {
        let tables: Vec<&LanguageTable> = match language {
            Some(name) => vec![
                self.languages.get(name).ok_or_else(|| StoreError::NotFound(name.to_string()))?,
            ],
            None => self.languages.values().collect(),
        };

        Ok(tables
            .into_iter()
            .flat_map(|table| {
                table
                    .search(term)
                    .into_iter()
                    .map(move |entry| SearchHit { language: table.name(), entry })
            })
            .collect())
    }

    /// Keys with a non-empty translation somewhere, in first-seen order.
    #[must_use]
    pub fn defined_keys(&self) -> Vec<String> {
        let keys: IndexSet<&str> = self
            .languages
            .values()
            .flat_map(LanguageTable::entries)
            .filter(|entry| !entry.is_blank())
            .map(|entry| entry.key.as_str())
            .collect();
        keys.into_iter().map(str::to_string).collect()
    }

    /// Languages without a non-empty translation of `key`.
    #[must_use]
    pub fn missing_translations(&self, key: &str) -> Vec<String> {
        self.languages
            .iter()
            .filter(|(_, table)| table.find(key).is_none_or(Entry::is_blank))
            .map(|(language, _)| language.clone())
            .collect()
    }

    /// Defined keys that some language required by `policy` lacks.
    #[must_use]
    pub fn coverage_report(&self, policy: &LanguagePolicy) -> Vec<MissingTranslation> {
        self.defined_keys()
            .into_iter()
            .filter_map(|key| {
                let missing_languages: Vec<String> = self
                    .missing_translations(&key)
                    .into_iter()
                    .filter(|language| policy.requires(language))
                    .collect();
                (!missing_languages.is_empty())
                    .then_some(MissingTranslation { key, missing_languages })
            })
            .collect()
    }

    /// Applies `edit` to a copy of `language`'s table, persists it, then commits.
    fn write(
        &mut self,
        language: &str,
        edit: impl FnOnce(&mut LanguageTable),
    ) -> Result<(), StoreError> {
        let table = self
            .languages
            .get_mut(language)
            .ok_or_else(|| StoreError::NotFound(language.to_string()))?;
        let mut updated = table.clone();
        edit(&mut updated);
        self.repository.save(&updated)?;
        *table = updated;
        Ok(())
    }
}
