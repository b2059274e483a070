//! Configuration file discovery and loading, and opening the configured
//! storage.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::schema::{PickerConfig, StorageKind, APP_DIR_NAME};
use crate::asset::AssetHandle;
use crate::error::{Result, SelectionError};
use crate::persist::{FilePersister, MemoryPersister, Persister};
use crate::selection::{AssetStore, LastSelectionRecorder, PickerSelection};

/// The user's config file: `~/.asset-selection/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    Some(
        dirs::home_dir()?
            .join(format!(".{}", APP_DIR_NAME))
            .join("config.yml"),
    )
}

/// Load and validate a config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the YAML is invalid.
/// Returns `ConfigValidation` if a value cannot be used.
pub fn load_config_file(path: &Path) -> Result<PickerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SelectionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SelectionError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    config.validate()?;
    Ok(config)
}

/// Parse YAML content into a [`PickerConfig`].
///
/// `source_path` is only used for error reporting. An empty document
/// yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PickerConfig> {
    if content.trim().is_empty() {
        return Ok(PickerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SelectionError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the user's config file, or the defaults if there is none.
pub fn load_config() -> Result<PickerConfig> {
    match user_config_path() {
        Some(path) if path.exists() => {
            debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(PickerConfig::default()),
    }
}

impl PickerConfig {
    /// Open the configured preference backend.
    pub fn open_persister(&self) -> Result<Box<dyn Persister>> {
        self.validate()?;

        match self.storage {
            StorageKind::File => {
                let persister = FilePersister::open(self.preferences_dir())?;
                Ok(Box::new(persister))
            }
            StorageKind::Memory => Ok(Box::new(MemoryPersister::new())),
        }
    }

    /// Open a selection seeded with `initial` that remembers its last asset
    /// in the configured backend.
    pub fn open_selection(
        &self,
        initial: impl IntoIterator<Item = AssetHandle>,
    ) -> Result<PickerSelection> {
        let recorder = LastSelectionRecorder::new(self.open_persister()?);
        Ok(AssetStore::with_observer(initial, recorder))
    }
}
