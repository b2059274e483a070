//! Remembering the last selected asset and album.

use tracing::{debug, warn};

use super::SelectionObserver;
use crate::asset::{AlbumId, Asset, AssetId};
use crate::error::Result;
use crate::persist::{PersistedKey, PersistedValue, Persister};

/// Persists the identifier of the selection's last asset on every change.
///
/// The stored asset identifier is a cache of the selection's tail: it is
/// written whenever a change leaves a different asset at the tail, and
/// left as is when a change empties the selection. The album identifier is owned
/// by whatever album chooser the host has and is only written through
/// [`remember_album`](LastSelectionRecorder::remember_album).
#[derive(Debug)]
pub struct LastSelectionRecorder<P> {
    persister: P,
}

impl<P: Persister> LastSelectionRecorder<P> {
    pub fn new(persister: P) -> Self {
        Self { persister }
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    pub fn persister_mut(&mut self) -> &mut P {
        &mut self.persister
    }

    pub fn into_inner(self) -> P {
        self.persister
    }

    /// Identifier of the asset that was last at the tail of the selection.
    pub fn last_selected_asset_id(&self) -> Option<AssetId> {
        self.persister
            .read(PersistedKey::LastSelectedAssetId)
            .and_then(|value| value.as_asset_id().cloned())
    }

    /// Identifier of the album the user last browsed.
    pub fn last_selected_album_id(&self) -> Option<AlbumId> {
        self.persister
            .read(PersistedKey::LastSelectedAlbumId)
            .and_then(|value| value.as_album_id().cloned())
    }

    /// Remember the album the user is browsing.
    pub fn remember_album(&mut self, album: impl Into<AlbumId>) -> Result<()> {
        let album = album.into();
        debug!("Remembering album {}", album);
        self.persister
            .save(PersistedValue::LastSelectedAlbum(album))
    }

    pub fn forget_album(&mut self) -> Result<()> {
        self.persister.clear(PersistedKey::LastSelectedAlbumId)
    }

    pub fn forget_asset(&mut self) -> Result<()> {
        self.persister.clear(PersistedKey::LastSelectedAssetId)
    }
}

impl<A: Asset, P: Persister> SelectionObserver<A> for LastSelectionRecorder<P> {
    fn selection_changed(&mut self, assets: &[A]) {
        let Some(last) = assets.last() else {
            return;
        };

        let id = AssetId::new(last.local_identifier());
        if self.last_selected_asset_id().as_ref() == Some(&id) {
            return;
        }

        if let Err(e) = self
            .persister
            .save(PersistedValue::LastSelectedAsset(id.clone()))
        {
            warn!("Failed to remember last selected asset {}: {}", id, e);
        }
    }
}
