//! Configuration loading, parsing, and validation.
//!
//! This module decides where remembered selections live:
//! - Schema definitions and validation in [`schema`]
//! - File discovery, loading, and opening storage in [`loader`]
//!
//! # Example
//!
//! ```
//! use asset_selection::asset::AssetHandle;
//! use asset_selection::config::{PickerConfig, StorageKind};
//!
//! let config = PickerConfig {
//!     storage: StorageKind::Memory,
//!     ..Default::default()
//! };
//!
//! let mut selection = config.open_selection(Vec::new()).unwrap();
//! selection.append(AssetHandle::image("IMG_0001"));
//! assert_eq!(selection.last_selected_asset_id().unwrap().as_str(), "IMG_0001");
//! ```
//!
//! # Configuration File Location
//!
//! [`load_config`] reads `~/.asset-selection/config.yml` when it exists and
//! falls back to [`PickerConfig::default`] otherwise.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, user_config_path};
pub use schema::{PickerConfig, StorageKind};
