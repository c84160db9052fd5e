//! Reading `.locale-store.json` from a workspace.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    StoreSettings,
};

/// Name of the workspace configuration file.
pub const CONFIG_FILE_NAME: &str = ".locale-store.json";

impl StoreSettings {
    /// Validated settings of the workspace at `workspace_root`.
    ///
    /// A missing config file yields the defaults.
    ///
    /// # Errors
    /// - The file exists but cannot be read
    /// - The file is not valid JSON for [`StoreSettings`]
    /// - Validation fails
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let config_path = workspace_root.join(CONFIG_FILE_NAME);

        let settings = match fs::read_to_string(&config_path) {
            Ok(content) => {
                tracing::debug!("Loading configuration from: {:?}", config_path);
                serde_json::from_str(&content)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No configuration at {:?}, using defaults", config_path);
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings loaded: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    /// Empty workspace directory
    #[fixture]
    fn workspace() -> TempDir {
        TempDir::new().unwrap()
    }

    /// Writes `content` as the workspace config file
    fn write_config(workspace: &TempDir, content: &str) {
        fs::write(workspace.path().join(CONFIG_FILE_NAME), content).unwrap();
    }

    /// Without a config file the defaults apply
    #[rstest]
    fn load_without_config_file(workspace: TempDir) {
        let settings = StoreSettings::load(workspace.path()).unwrap();

        assert_eq!(settings, StoreSettings::default());
    }

    /// Fields present in the file override the defaults
    #[rstest]
    fn load_partial_config(workspace: TempDir) {
        write_config(&workspace, r#"{"resourceSuffix": "Strings"}"#);

        let settings = StoreSettings::load(workspace.path()).unwrap();

        assert_eq!(settings.resource_suffix, "Strings");
        assert_eq!(settings.localization_dir, "Localization");
    }

    /// Malformed JSON is a parse error
    #[rstest]
    fn load_invalid_json(workspace: TempDir) {
        write_config(&workspace, "invalid json");

        let result = StoreSettings::load(workspace.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// Well-formed but invalid settings are rejected
    #[rstest]
    fn load_rejects_invalid_settings(workspace: TempDir) {
        write_config(
            &workspace,
            r#"{"requiredLanguages": ["en"], "optionalLanguages": ["de"]}"#,
        );

        let result = StoreSettings::load(workspace.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(errors)) if errors.len() == 1));
    }

    /// A directory in place of the config file is an I/O error
    #[rstest]
    fn load_unreadable_config(workspace: TempDir) {
        fs::create_dir(workspace.path().join(CONFIG_FILE_NAME)).unwrap();

        let result = StoreSettings::load(workspace.path());

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
