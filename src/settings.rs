//! Persisted cleaning options.
//!
//! The engine never touches storage. Callers hold a [`SettingsStore`] and
//! decide when to load and save.

use crate::error::{Error, Result};
use crate::options::CleaningOptions;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "UNCLOAK_SETTINGS";

const SETTINGS_FILE: &str = "settings.json";

/// Key-value style store for the last-used options.
pub trait SettingsStore {
    /// Loads saved options. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<CleaningOptions>>;

    /// Saves options, replacing what was stored.
    fn save(&self, options: &CleaningOptions) -> Result<()>;

    /// Removes saved options.
    fn clear(&self) -> Result<()>;
}

/// Stores options as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the default location: `$UNCLOAK_SETTINGS`, else the
    /// platform config directory.
    pub fn default_location() -> Result<Self> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Ok(Self::new(path));
        }
        let dirs = ProjectDirs::from("dev", "iyulab", "uncloak").ok_or_else(|| {
            Error::StorageUnavailable("unable to resolve project directories".into())
        })?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<CleaningOptions>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, options: &CleaningOptions) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(options)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<CleaningOptions>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<CleaningOptions>>> {
        self.saved
            .lock()
            .map_err(|_| Error::StorageUnavailable("memory store poisoned".into()))
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<CleaningOptions>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, options: &CleaningOptions) -> Result<()> {
        *self.slot()? = Some(options.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Loads saved options, falling back to defaults on any failure.
pub fn load_or_default(store: &dyn SettingsStore) -> CleaningOptions {
    match store.load() {
        Ok(Some(options)) => options,
        Ok(None) => CleaningOptions::default(),
        Err(error) => {
            tracing::warn!(%error, "failed to load saved settings; using defaults");
            CleaningOptions::default()
        }
    }
}

/// Saves options, logging instead of failing.
///
/// Returns true if the options were stored.
pub fn save_best_effort(store: &dyn SettingsStore, options: &CleaningOptions) -> bool {
    match store.save(options) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            false
        }
    }
}
