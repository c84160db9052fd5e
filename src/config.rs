//! Workspace configuration (`.locale-store.json`).

/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    ConfigError,
    StoreSettings,
    ValidationError,
};
