//! Language resources stored as JSON files in a single directory.

use std::fs::{
    self,
    File,
    OpenOptions,
};
use std::io::{
    ErrorKind,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use tempfile::NamedTempFile;

use super::{
    LanguageRepository,
    LanguageResource,
    PersistenceError,
};
use crate::config::StoreSettings;
use crate::table::LanguageTable;

/// Extension of every resource file.
const RESOURCE_EXTENSION: &str = ".json";

/// Stores each language as `<dir>/<Name><suffix>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    /// Directory holding every resource
    dir: PathBuf,
    /// Appended to the language name to form the file stem
    suffix: String,
}

impl JsonFileRepository {
    /// Repository over `dir`, naming files `<Name><suffix>.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self { dir: dir.into(), suffix: suffix.into() }
    }

    /// Repository rooted at the configured directory of a workspace.
    #[must_use]
    pub fn from_settings(workspace_root: &Path, settings: &StoreSettings) -> Self {
        Self::new(workspace_root.join(&settings.localization_dir), settings.resource_suffix.clone())
    }

    /// Directory holding the resources.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the resource backing `name`.
    #[must_use]
    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{}{RESOURCE_EXTENSION}", self.suffix))
    }

    /// Language name encoded in a resource file name, if it is one.
    fn language_from_file_name(&self, file_name: &str) -> Option<String> {
        let stem = file_name.strip_suffix(RESOURCE_EXTENSION)?;
        let name = stem.strip_suffix(self.suffix.as_str())?;
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Creates the resource directory on first use.
    fn ensure_dir(&self, name: &str) -> Result<(), PersistenceError> {
        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir).map_err(|source| io_error(name, source))?;
            tracing::info!("Created localization directory {:?}", self.dir);
        }
        Ok(())
    }

    /// Serializes `resource` into `file` and flushes it to disk.
    fn write_resource(
        file: &mut File,
        name: &str,
        resource: &LanguageResource,
    ) -> Result<(), PersistenceError> {
        let mut json = serde_json::to_string_pretty(resource)
            .map_err(|source| PersistenceError::Parse { name: name.to_string(), source })?;
        json.push('\n');
        file.write_all(json.as_bytes()).map_err(|source| io_error(name, source))?;
        file.sync_all().map_err(|source| io_error(name, source))
    }

    /// Replaces `path` with `resource` through a temporary file in the same
    /// directory. The temporary file is removed if any step fails.
    fn replace_resource(
        &self,
        path: &Path,
        name: &str,
        resource: &LanguageResource,
    ) -> Result<(), PersistenceError> {
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|source| io_error(name, source))?;
        Self::write_resource(tmp.as_file_mut(), name, resource)?;
        tmp.persist(path).map_err(|e| io_error(name, e.error))?;
        Ok(())
    }
}

/// Maps an I/O failure on `name`, keeping "not found" distinguishable.
fn io_error(name: &str, source: std::io::Error) -> PersistenceError {
    if source.kind() == ErrorKind::NotFound {
        PersistenceError::NotFound(name.to_string())
    } else {
        PersistenceError::Io { name: name.to_string(), source }
    }
}

impl LanguageRepository for JsonFileRepository {
    fn list_languages(&self) -> Result<Vec<String>, PersistenceError> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Localization directory {:?} does not exist yet", self.dir);
                return Ok(Vec::new());
            }
            Err(source) => return Err(io_error(&self.dir.to_string_lossy(), source)),
        };

        let mut names = Vec::new();
        for dir_entry in read_dir {
            let dir_entry =
                dir_entry.map_err(|source| io_error(&self.dir.to_string_lossy(), source))?;
            if !dir_entry.path().is_file() {
                continue;
            }
            if let Some(name) =
                dir_entry.file_name().to_str().and_then(|f| self.language_from_file_name(f))
            {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<LanguageTable, PersistenceError> {
        let path = self.resource_path(name);
        tracing::debug!("Loading localization resource {:?}", path);

        let content = fs::read_to_string(&path).map_err(|source| io_error(name, source))?;
        let resource: LanguageResource = serde_json::from_str(&content)
            .map_err(|source| PersistenceError::Parse { name: name.to_string(), source })?;

        Ok(resource.into_table(name))
    }

    fn create(&mut self, name: &str) -> Result<(), PersistenceError> {
        self.ensure_dir(name)?;
        let path = self.resource_path(name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(PersistenceError::AlreadyExists(name.to_string()));
            }
            Err(source) => return Err(io_error(name, source)),
        };
        Self::write_resource(&mut file, name, &LanguageResource::default())?;

        tracing::debug!("Created localization resource {:?}", path);
        Ok(())
    }

    fn save(&mut self, table: &LanguageTable) -> Result<(), PersistenceError> {
        let name = table.name();
        let path = self.resource_path(name);
        if !path.is_file() {
            return Err(PersistenceError::NotFound(name.to_string()));
        }

        self.replace_resource(&path, name, &LanguageResource::from_table(table))?;

        tracing::debug!("Saved {} entries to {:?}", table.len(), path);
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<(), PersistenceError> {
        let path = self.resource_path(name);
        fs::remove_file(&path).map_err(|source| io_error(name, source))?;
        tracing::debug!("Deleted localization resource {:?}", path);
        Ok(())
    }
}
