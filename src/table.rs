//! One language's translation entries.

use serde::{
    Deserialize,
    Serialize,
};

/// A single key → translation pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Entry {
    /// Lookup key, unique within a table
    pub key: String,
    /// Translated text; may be empty
    pub translation: String,
}

impl Entry {
    /// Entry mapping `key` to `translation`.
    #[must_use]
    pub fn new(key: impl Into<String>, translation: impl Into<String>) -> Self {
        Self { key: key.into(), translation: translation.into() }
    }

    /// Empty translations are stored but count as absent for queries.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.translation.is_empty()
    }
}

/// Translation table for one language.
///
/// Keys are unique within a table. Entries keep insertion order: updating an
/// existing key rewrites it in place, new keys go to the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTable {
    /// Language this table translates into
    name: String,
    /// Entries in insertion order
    entries: Vec<Entry>,
}

impl LanguageTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: Vec::new() }
    }

    /// Builds a table from persisted entries.
    ///
    /// Later duplicates of a key overwrite the earlier entry, so the
    /// uniqueness invariant holds even for hand-edited resources.
    #[must_use]
    pub fn from_entries(name: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut table = Self::new(name);
        for entry in entries {
            table.add_or_update(entry.key, entry.translation);
        }
        table
    }

    /// Language name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries, blank ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrites the translation for `key`, or appends a new entry.
    pub fn add_or_update(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        let key = key.into();
        let translation = translation.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.translation = translation,
            None => self.entries.push(Entry { key, translation }),
        }
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Entries whose key or translation contains `term` (case-sensitive).
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.key.contains(term) || e.translation.contains(term))
            .collect()
    }

    /// Removes the entry for `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let position = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(position))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    /// `hello` and `world` in French
    #[fixture]
    fn greetings() -> LanguageTable {
        LanguageTable::from_entries(
            "fr",
            [Entry::new("hello", "bonjour"), Entry::new("world", "monde")],
        )
    }

    /// Keys of `entries`, in order
    fn keys(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Unknown key is appended
    #[rstest]
    fn add_appends_new_key() {
        let mut table = LanguageTable::new("fr");

        table.add_or_update("greet", "Bonjour");

        assert_that!(table.len(), eq(1));
        assert_that!(table.find("greet").map(|e| e.translation.as_str()), some(eq("Bonjour")));
    }

    /// Known key keeps its position
    #[rstest]
    fn update_existing_key_in_place(mut greetings: LanguageTable) {
        greetings.add_or_update("hello", "salut");

        assert_that!(greetings.len(), eq(2));
        assert_eq!(
            greetings.entries(),
            [Entry::new("hello", "salut"), Entry::new("world", "monde")]
        );
    }

    /// Insertion order, not key order
    #[rstest]
    fn new_keys_are_appended_not_sorted(mut greetings: LanguageTable) {
        greetings.add_or_update("abc", "alphabet");

        assert_that!(greetings.entries().last().map(|e| e.key.as_str()), some(eq("abc")));
    }

    /// Same pair twice changes nothing
    #[rstest]
    fn add_is_idempotent() {
        let mut once = LanguageTable::new("de");
        once.add_or_update("greet", "Hallo");
        let mut twice = once.clone();
        twice.add_or_update("greet", "Hallo");

        assert_eq!(twice, once);
    }

    /// Blank translations are kept as entries
    #[rstest]
    fn empty_translation_is_stored() {
        let mut table = LanguageTable::new("fr");

        table.add_or_update("greet", "");

        assert_that!(table.len(), eq(1));
        assert_that!(table.find("greet").map(Entry::is_blank), some(eq(true)));
    }

    /// Lookup is exact and case-sensitive
    #[rstest]
    #[case::exact("hello", true)]
    #[case::prefix("hell", false)]
    #[case::case_sensitive("Hello", false)]
    fn find_is_exact(greetings: LanguageTable, #[case] key: &str, #[case] found: bool) {
        assert_that!(greetings.find(key).is_some(), eq(found));
    }

    /// Substring search over keys and translations
    #[rstest]
    #[case::key_or_translation("lo", &["hello"])]
    #[case::translation_only("mon", &["world"])]
    #[case::empty_term_matches_all("", &["hello", "world"])]
    #[case::case_sensitive("LO", &[])]
    fn search_by_substring(
        greetings: LanguageTable,
        #[case] term: &str,
        #[case] expected: &[&str],
    ) {
        let hits = greetings.search(term);

        assert_eq!(keys(&hits), expected);
    }

    /// Hits carry key and translation
    #[rstest]
    fn search_returns_whole_entries(greetings: LanguageTable) {
        let hits = greetings.search("lo");

        assert_eq!(hits, [&Entry::new("hello", "bonjour")]);
    }

    /// Last duplicate wins, first position is kept
    #[rstest]
    fn from_entries_collapses_duplicate_keys() {
        let table = LanguageTable::from_entries(
            "fr",
            [Entry::new("a", "1"), Entry::new("b", "2"), Entry::new("a", "3")],
        );

        assert_eq!(table.entries(), [Entry::new("a", "3"), Entry::new("b", "2")]);
    }

    /// Removal keeps the rest in order
    #[rstest]
    fn remove_keeps_remaining_order() {
        let mut table = LanguageTable::from_entries(
            "fr",
            [Entry::new("a", "1"), Entry::new("b", "2"), Entry::new("c", "3")],
        );

        let removed = table.remove("b");

        assert_eq!(removed, Some(Entry::new("b", "2")));
        assert_that!(
            table.entries(),
            elements_are![field!(Entry.key, eq("a")), field!(Entry.key, eq("c"))]
        );
        assert_that!(table.remove("b"), none());
    }
}
