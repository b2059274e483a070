//! Opaque media asset handles.
//!
//! The selection never looks inside an asset. All it needs is a stable
//! identifier, exposed through the [`Asset`] trait, so hosts can select
//! their own platform handle types. [`AssetHandle`] is the ready-made
//! handle for hosts that only carry an identifier and a media kind.

mod id;

pub use id::{AlbumId, AssetId};

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A media asset that can be placed in a selection.
///
/// Equality of the implementing type decides selection uniqueness, so it
/// should agree with [`local_identifier`](Asset::local_identifier).
pub trait Asset: PartialEq {
    /// The platform-local identifier persisted as the last selected asset.
    fn local_identifier(&self) -> &str;
}

/// Kind of media an asset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    #[default]
    Unknown,
}

/// Identifier plus media kind for an asset owned by the host library.
///
/// Two handles are equal when their identifiers are equal; the media kind
/// is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHandle {
    id: AssetId,
    #[serde(default)]
    kind: MediaKind,
}

impl AssetHandle {
    /// Create a handle of the given kind.
    pub fn new(id: impl Into<AssetId>, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Create a handle for a still image.
    pub fn image(id: impl Into<AssetId>) -> Self {
        Self::new(id, MediaKind::Image)
    }

    /// Create a handle for a video.
    pub fn video(id: impl Into<AssetId>) -> Self {
        Self::new(id, MediaKind::Video)
    }

    pub fn id(&self) -> &AssetId {
        &self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

impl PartialEq for AssetHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetHandle {}

impl Hash for AssetHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Asset for AssetHandle {
    fn local_identifier(&self) -> &str {
        self.id.as_str()
    }
}

impl Asset for AssetId {
    fn local_identifier(&self) -> &str {
        self.as_str()
    }
}
