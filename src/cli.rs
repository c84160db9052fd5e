//! Command-line editor over a workspace's translation store.

/// `LANG=TEXT` argument parsing
mod assignment;
/// Command execution
mod commands;

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use thiserror::Error;

pub use commands::run;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Command line of the `locale-store` binary.
#[derive(Debug, Parser)]
#[command(name = "locale-store")]
#[command(about = "Edit per-language translation tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root holding `.locale-store.json` and the localization directory
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Editor subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all languages
    Languages,

    /// Add a new, empty language
    AddLanguage {
        /// Language name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a language and all of its translations
    DeleteLanguage {
        /// Language name
        #[arg(value_name = "NAME")]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a key to the given languages; empty translations are skipped
    Set {
        /// Localization key
        #[arg(value_name = "KEY")]
        key: String,

        /// Translations as LANG=TEXT
        #[arg(
            value_name = "LANG=TEXT",
            value_parser = assignment::parse_assignment,
            required = true
        )]
        translations: Vec<(String, String)>,
    },

    /// Show every language's translation of a key
    Get {
        /// Localization key
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Overwrite translations of a key; empty translations clear the value
    Update {
        /// Localization key
        #[arg(value_name = "KEY")]
        key: String,

        /// Translations as LANG=TEXT
        #[arg(
            value_name = "LANG=TEXT",
            value_parser = assignment::parse_assignment,
            required = true
        )]
        translations: Vec<(String, String)>,
    },

    /// Find entries whose key or translation contains TERM
    Search {
        /// Text to look for
        #[arg(value_name = "TERM")]
        term: String,

        /// Only search this language
        #[arg(short, long, value_name = "NAME")]
        language: Option<String>,
    },

    /// List languages missing a key, or every incomplete key
    Missing {
        /// Key to check; every defined key when omitted
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },

    /// Remove a key from every language
    RemoveKey {
        /// Localization key
        #[arg(value_name = "KEY")]
        key: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Failure of a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid or unreadable workspace config
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing output or reading a confirmation failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
