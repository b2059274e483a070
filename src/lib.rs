//! asset-selection - Ordered media-asset selection for photo pickers.
//!
//! A picker keeps the user's selection of photos and videos in the order
//! they were picked, never holding the same asset twice, and remembers
//! the last selected asset and album across sessions.
//!
//! # Modules
//!
//! - [`asset`] - Opaque asset handles and identifiers
//! - [`selection`] - The ordered selection and its change subscription
//! - [`persist`] - Storage for the last selected asset and album
//! - [`config`] - Choosing and opening the storage backend
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use asset_selection::asset::{AssetHandle, AssetId};
//! use asset_selection::persist::MemoryPersister;
//! use asset_selection::selection::{AssetStore, LastSelectionRecorder};
//!
//! let recorder = LastSelectionRecorder::new(MemoryPersister::new());
//! let mut selection = AssetStore::with_observer(Vec::new(), recorder);
//!
//! selection.append(AssetHandle::image("A"));
//! selection.append(AssetHandle::video("B"));
//! selection.append(AssetHandle::image("A")); // already selected
//! selection.remove(&AssetHandle::image("A"));
//!
//! assert_eq!(selection.count(), 1);
//! assert_eq!(selection.last_selected_asset_id(), Some(AssetId::new("B")));
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod persist;
pub mod selection;

pub use error::{Result, SelectionError};
