//! The ordered selection of assets.

use std::slice;

use tracing::debug;

use super::{LastSelectionRecorder, NoopObserver, SelectionObserver};
use crate::asset::{AlbumId, Asset, AssetId};
use crate::persist::Persister;

/// An insertion-ordered list of unique assets.
///
/// The list is only changed through the store's own operations, and every
/// operation that changes it notifies the observer exactly once.
#[derive(Debug)]
pub struct AssetStore<A, O = NoopObserver> {
    assets: Vec<A>,
    observer: O,
}

impl<A: Asset> AssetStore<A, NoopObserver> {
    /// Create an empty store without an observer.
    pub fn new() -> Self {
        Self::with_observer(Vec::new(), NoopObserver)
    }

    /// Create a store holding `assets`, without an observer.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn from_assets(assets: impl IntoIterator<Item = A>) -> Self {
        Self::with_observer(assets, NoopObserver)
    }
}

impl<A: Asset> Default for AssetStore<A, NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Asset, O: SelectionObserver<A>> AssetStore<A, O> {
    /// Create a store holding `assets` that reports changes to `observer`.
    ///
    /// Duplicates are dropped, keeping the first occurrence. The initial
    /// contents are not reported.
    pub fn with_observer(assets: impl IntoIterator<Item = A>, observer: O) -> Self {
        let mut unique: Vec<A> = Vec::new();
        for asset in assets {
            if !unique.contains(&asset) {
                unique.push(asset);
            }
        }

        Self {
            assets: unique,
            observer,
        }
    }

    /// Replace the observer, keeping the current selection.
    pub fn subscribe<N: SelectionObserver<A>>(self, observer: N) -> AssetStore<A, N> {
        AssetStore {
            assets: self.assets,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Split the store into its selection and observer.
    pub fn into_parts(self) -> (Vec<A>, O) {
        (self.assets, self.observer)
    }

    /// Number of selected assets.
    pub fn count(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The selection in insertion order.
    pub fn assets(&self) -> &[A] {
        &self.assets
    }

    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.assets.iter()
    }

    pub fn first(&self) -> Option<&A> {
        self.assets.first()
    }

    pub fn last(&self) -> Option<&A> {
        self.assets.last()
    }

    pub fn contains(&self, asset: &A) -> bool {
        self.assets.contains(asset)
    }

    /// Position of `asset` in the selection.
    pub fn index_of(&self, asset: &A) -> Option<usize> {
        self.assets.iter().position(|a| a == asset)
    }

    /// Add `asset` to the end of the selection.
    ///
    /// Returns `false` without notifying if it is already selected.
    pub fn append(&mut self, asset: A) -> bool {
        if self.contains(&asset) {
            return false;
        }

        debug!(
            "Selected asset {} ({} selected)",
            asset.local_identifier(),
            self.assets.len() + 1
        );
        self.assets.push(asset);
        self.notify();
        true
    }

    /// Remove `asset` from the selection.
    ///
    /// Returns the removed asset, or `None` without notifying if it was not
    /// selected.
    pub fn remove(&mut self, asset: &A) -> Option<A> {
        let index = self.index_of(asset)?;
        let removed = self.assets.remove(index);

        debug!(
            "Deselected asset {} ({} selected)",
            removed.local_identifier(),
            self.assets.len()
        );
        self.notify();
        Some(removed)
    }

    /// Remove and return the earliest selected asset.
    pub fn remove_first(&mut self) -> Option<A> {
        if self.assets.is_empty() {
            return None;
        }

        let removed = self.assets.remove(0);
        debug!(
            "Dropped oldest selected asset {} ({} selected)",
            removed.local_identifier(),
            self.assets.len()
        );
        self.notify();
        Some(removed)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        if self.assets.is_empty() {
            return;
        }

        debug!("Cleared selection of {} assets", self.assets.len());
        self.assets.clear();
        self.notify();
    }

    fn notify(&mut self) {
        self.observer.selection_changed(self.assets.as_slice());
    }
}

impl<A: Asset, P: Persister> AssetStore<A, LastSelectionRecorder<P>> {
    /// Identifier of the asset that was last at the tail of the selection,
    /// possibly from an earlier session.
    pub fn last_selected_asset_id(&self) -> Option<AssetId> {
        self.observer.last_selected_asset_id()
    }

    /// Identifier of the album the user last browsed.
    pub fn last_selected_album_id(&self) -> Option<AlbumId> {
        self.observer.last_selected_album_id()
    }
}

impl<'a, A, O> IntoIterator for &'a AssetStore<A, O> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
