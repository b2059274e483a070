//! Ordered asset selection and change subscription.
//!
//! [`AssetStore`] owns the selection. It reports every change to a single
//! [`SelectionObserver`]; a [`LastSelectionRecorder`] is the observer that
//! remembers the selection's last asset across sessions.

mod observer;
mod recorder;
mod store;

pub use observer::{NoopObserver, SelectionObserver};
pub use recorder::LastSelectionRecorder;
pub use store::AssetStore;

use crate::asset::AssetHandle;
use crate::persist::Persister;

/// A selection of [`AssetHandle`]s that remembers its last asset.
pub type PickerSelection<P = Box<dyn Persister>> = AssetStore<AssetHandle, LastSelectionRecorder<P>>;
