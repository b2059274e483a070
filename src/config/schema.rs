//! Configuration schema for the picker's preference storage.
//!
//! Maps to the YAML configuration file format:
//!
//! ```yaml
//! domain: com.example.gallery
//! storage: file
//! state_dir: /var/lib/gallery
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SelectionError};

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "asset-selection";

/// Where remembered selections are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// A YAML preference document under the state directory.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Namespace for the preference document, one directory per domain.
    pub domain: String,

    /// Preference backend.
    pub storage: StorageKind,

    /// Base directory for preference documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            domain: Self::DEFAULT_DOMAIN.to_string(),
            storage: StorageKind::default(),
            state_dir: None,
        }
    }
}

impl PickerConfig {
    pub const DEFAULT_DOMAIN: &'static str = APP_DIR_NAME;

    /// Default base directory for preference documents.
    ///
    /// The platform data directory (e.g. `~/.local/share/asset-selection`),
    /// falling back to `~/.asset-selection`.
    pub fn default_state_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(format!(".{}", APP_DIR_NAME))
            })
    }

    /// Base directory in effect.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(Self::default_state_dir)
    }

    /// Directory holding this domain's preference document.
    pub fn preferences_dir(&self) -> PathBuf {
        self.state_dir().join(&self.domain)
    }

    /// Check the configuration for values that cannot be used.
    ///
    /// The domain becomes a directory name, so it must be a single,
    /// non-empty path component.
    pub fn validate(&self) -> Result<()> {
        let domain = self.domain.trim();
        if domain.is_empty() {
            return Err(SelectionError::ConfigValidation {
                message: "domain must not be empty".to_string(),
            });
        }

        if domain != self.domain {
            return Err(SelectionError::ConfigValidation {
                message: format!("domain '{}' has surrounding whitespace", self.domain),
            });
        }

        if domain == "." || domain == ".." || domain.contains(['/', '\\']) {
            return Err(SelectionError::ConfigValidation {
                message: format!(
                    "domain '{}' must be a single directory name",
                    self.domain
                ),
            });
        }

        Ok(())
    }
}
