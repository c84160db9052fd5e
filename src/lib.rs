//! locale-store
//!
//! Per-language translation tables: a store of named languages, each mapping
//! keys to translated strings, persisted one JSON resource per language.

pub mod cli;
pub mod config;
pub mod persistence;
pub mod store;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use persistence::{
    InMemoryRepository,
    JsonFileRepository,
    LanguageRepository,
};
pub use store::{
    FetchedTranslations,
    StoreError,
    TranslationStore,
    Translations,
};
pub use table::{
    Entry,
    LanguageTable,
};
