//! In-memory preference storage.

use std::collections::HashMap;

use super::{PersistedKey, PersistedValue, Persister};
use crate::error::Result;

/// A [`Persister`] that forgets everything when dropped.
///
/// Values are held as raw strings under the raw key spellings, the same
/// shape a platform preference store keeps them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersister {
    values: HashMap<&'static str, String>,
}

impl MemoryPersister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Persister for MemoryPersister {
    fn save(&mut self, value: PersistedValue) -> Result<()> {
        let key = value.key().as_str();
        let raw = match value {
            PersistedValue::LastSelectedAsset(id) => id.into_inner(),
            PersistedValue::LastSelectedAlbum(id) => id.into_inner(),
        };
        self.values.insert(key, raw);
        Ok(())
    }

    fn read(&self, key: PersistedKey) -> Option<PersistedValue> {
        self.values
            .get(key.as_str())
            .map(|raw| PersistedValue::from_raw(key, raw.as_str()))
    }

    fn clear(&mut self, key: PersistedKey) -> Result<()> {
        self.values.remove(key.as_str());
        Ok(())
    }
}
