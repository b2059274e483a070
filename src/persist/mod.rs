//! Durable storage for the last selected asset and album.
//!
//! Exactly two keys are ever persisted, see [`PersistedKey`]. Values are
//! the explicit [`PersistedValue`] variants rather than arbitrary
//! serializable data, so a key can never hold the wrong kind of
//! identifier.
//!
//! Backends:
//! - [`MemoryPersister`] keeps values for the lifetime of the process
//! - [`FilePersister`] keeps a YAML preference document on disk

mod file;
mod memory;

pub use file::FilePersister;
pub use memory::MemoryPersister;

use std::fmt;

use crate::asset::{AlbumId, AssetId};
use crate::error::Result;

/// The well-known preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistedKey {
    /// Identifier of the asset at the tail of the selection.
    LastSelectedAssetId,
    /// Identifier of the album the user last browsed.
    LastSelectedAlbumId,
}

impl PersistedKey {
    /// Every key, in a stable order.
    pub const ALL: [PersistedKey; 2] = [
        PersistedKey::LastSelectedAssetId,
        PersistedKey::LastSelectedAlbumId,
    ];

    /// The raw key under which the value is stored.
    pub fn as_str(self) -> &'static str {
        match self {
            PersistedKey::LastSelectedAssetId => "lastSelectedAssetID",
            PersistedKey::LastSelectedAlbumId => "lastSelectedAlbumID",
        }
    }
}

impl fmt::Display for PersistedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored under one of the [`PersistedKey`]s.
///
/// The variant determines the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistedValue {
    LastSelectedAsset(AssetId),
    LastSelectedAlbum(AlbumId),
}

impl PersistedValue {
    /// The key this value is stored under.
    pub fn key(&self) -> PersistedKey {
        match self {
            PersistedValue::LastSelectedAsset(_) => PersistedKey::LastSelectedAssetId,
            PersistedValue::LastSelectedAlbum(_) => PersistedKey::LastSelectedAlbumId,
        }
    }

    /// The stored identifier.
    pub fn as_str(&self) -> &str {
        match self {
            PersistedValue::LastSelectedAsset(id) => id.as_str(),
            PersistedValue::LastSelectedAlbum(id) => id.as_str(),
        }
    }

    /// Rebuild a value from a key and its raw stored string.
    pub fn from_raw(key: PersistedKey, raw: impl Into<String>) -> Self {
        match key {
            PersistedKey::LastSelectedAssetId => {
                PersistedValue::LastSelectedAsset(AssetId::new(raw))
            }
            PersistedKey::LastSelectedAlbumId => {
                PersistedValue::LastSelectedAlbum(AlbumId::new(raw))
            }
        }
    }

    /// The asset identifier, if this is a last-selected-asset value.
    pub fn as_asset_id(&self) -> Option<&AssetId> {
        match self {
            PersistedValue::LastSelectedAsset(id) => Some(id),
            PersistedValue::LastSelectedAlbum(_) => None,
        }
    }

    /// The album identifier, if this is a last-selected-album value.
    pub fn as_album_id(&self) -> Option<&AlbumId> {
        match self {
            PersistedValue::LastSelectedAlbum(id) => Some(id),
            PersistedValue::LastSelectedAsset(_) => None,
        }
    }
}

/// Key-value preference storage for the two well-known keys.
///
/// Reads never fail: an unset or cleared key is `None`. Writes may fail
/// for backends that touch the filesystem.
pub trait Persister {
    /// Store a value under its key, replacing any previous value.
    fn save(&mut self, value: PersistedValue) -> Result<()>;

    /// Read the value stored under `key`.
    fn read(&self, key: PersistedKey) -> Option<PersistedValue>;

    /// Remove any value stored under `key`.
    fn clear(&mut self, key: PersistedKey) -> Result<()>;
}

impl<P: Persister + ?Sized> Persister for Box<P> {
    fn save(&mut self, value: PersistedValue) -> Result<()> {
        (**self).save(value)
    }

    fn read(&self, key: PersistedKey) -> Option<PersistedValue> {
        (**self).read(key)
    }

    fn clear(&mut self, key: PersistedKey) -> Result<()> {
        (**self).clear(key)
    }
}
