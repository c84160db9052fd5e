//! Executes a parsed [`Cli`] against the workspace store.

use std::io::{
    BufRead,
    Write,
};

use super::assignment::into_translations;
use super::{
    Cli,
    CliError,
    Command,
};
use crate::config::StoreSettings;
use crate::persistence::JsonFileRepository;
use crate::store::{
    LanguagePolicy,
    StoreError,
    TranslationStore,
};

/// Store backed by the workspace's resource files.
type Store = TranslationStore<JsonFileRepository>;

/// Runs one command, writing results to `out` and reading confirmations
/// from `input`.
pub fn run(
    cli: &Cli,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<(), CliError> {
    let settings = StoreSettings::load(&cli.root)?;

    let repository = JsonFileRepository::from_settings(&cli.root, &settings);
    tracing::debug!("Using localization directory {:?}", repository.dir());
    let mut store = TranslationStore::open(repository)?;

    match &cli.command {
        Command::Languages => list_languages(&store, out),
        Command::AddLanguage { name } => {
            store.create_language(name)?;
            writeln!(out, "Created language '{name}'")?;
            Ok(())
        }
        Command::DeleteLanguage { name, yes } => {
            delete_language(&mut store, name, *yes, out, input)
        }
        Command::Set { key, translations } => {
            store.set_translations(key, &into_translations(translations))?;
            writeln!(out, "Added localization for key '{key}'")?;
            Ok(())
        }
        Command::Get { key } => fetch(&store, key, out),
        Command::Update { key, translations } => {
            store.update_translations(key, &into_translations(translations))?;
            writeln!(out, "Updated translations for key '{key}'")?;
            Ok(())
        }
        Command::Search { term, language } => search(&store, term, language.as_deref(), out),
        Command::Missing { key: Some(key) } => missing_for_key(&store, key, out),
        Command::Missing { key: None } => {
            let policy = LanguagePolicy::from_settings(&settings);
            coverage(&store, &policy, out)
        }
        Command::RemoveKey { key, yes } => remove_key(&mut store, key, *yes, out, input),
    }
}

/// Asks a yes/no question; anything but `y`/`yes` declines.
fn confirm(
    question: &str,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> std::io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `languages`
fn list_languages(store: &Store, out: &mut impl Write) -> Result<(), CliError> {
    let names = store.list_language_names();
    if names.is_empty() {
        writeln!(out, "No languages")?;
    }
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// `delete-language`, prompting unless `yes` is set.
fn delete_language(
    store: &mut Store,
    name: &str,
    yes: bool,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<(), CliError> {
    if !store.contains(name) {
        return Err(StoreError::NotFound(name.to_string()).into());
    }
    let question = format!(
        "Are you sure you want to delete the language '{name}'? This action cannot be undone."
    );
    if !yes && !confirm(&question, out, input)? {
        writeln!(out, "Cancelled")?;
        return Ok(());
    }

    store.delete_language(name)?;
    writeln!(out, "Deleted language '{name}'")?;
    Ok(())
}

/// `get`: one `language: translation` line per language holding the key.
fn fetch(store: &Store, key: &str, out: &mut impl Write) -> Result<(), CliError> {
    let fetched = store.fetch_translations(key);
    if !fetched.found {
        writeln!(out, "No localization found")?;
        return Ok(());
    }
    for (language, translation) in &fetched.translations {
        writeln!(out, "{language}: {translation}")?;
    }
    Ok(())
}

/// `search`: tab-separated language, key and translation.
fn search(
    store: &Store,
    term: &str,
    language: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let hits = store.search(term, language)?;
    if hits.is_empty() {
        writeln!(out, "No matches")?;
    }
    for hit in hits {
        writeln!(out, "{}\t{}\t{}", hit.language, hit.entry.key, hit.entry.translation)?;
    }
    Ok(())
}

/// `missing KEY`
fn missing_for_key(store: &Store, key: &str, out: &mut impl Write) -> Result<(), CliError> {
    let missing = store.missing_translations(key);
    if missing.is_empty() {
        writeln!(out, "Every language translates '{key}'")?;
    }
    for language in missing {
        writeln!(out, "{language}")?;
    }
    Ok(())
}

/// `missing` without a key: every incomplete key under `policy`.
fn coverage(
    store: &Store,
    policy: &LanguagePolicy,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let report = store.coverage_report(policy);
    if report.is_empty() {
        writeln!(out, "No missing translations")?;
    }
    for missing in report {
        writeln!(out, "{}: {}", missing.key, missing.missing_languages.join(", "))?;
    }
    Ok(())
}

/// `remove-key`, prompting unless `yes` is set.
fn remove_key(
    store: &mut Store,
    key: &str,
    yes: bool,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<(), CliError> {
    if key.trim().is_empty() {
        return Err(StoreError::EmptyKey.into());
    }
    let question = format!("Remove key '{key}' from every language?");
    if !yes && !confirm(&question, out, input)? {
        writeln!(out, "Cancelled")?;
        return Ok(());
    }

    let removed = store.remove_key(key)?;
    if removed.is_empty() {
        writeln!(out, "Key '{key}' not found")?;
    } else {
        writeln!(out, "Removed '{key}' from {}", removed.join(", "))?;
    }
    Ok(())
}
