//! YAML preference document on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{PersistedKey, PersistedValue, Persister};
use crate::asset::{AlbumId, AssetId};
use crate::error::{Result, SelectionError};

/// On-disk layout of the preference document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredPreferences {
    #[serde(
        rename = "lastSelectedAssetID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_selected_asset_id: Option<AssetId>,

    #[serde(
        rename = "lastSelectedAlbumID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_selected_album_id: Option<AlbumId>,
}

/// A [`Persister`] backed by `preferences.yml` in a directory.
///
/// The document is read once by [`open`](FilePersister::open). Every
/// `save` and `clear` writes the whole document back; a failed write
/// leaves the values seen by `read` unchanged.
#[derive(Debug)]
pub struct FilePersister {
    dir: PathBuf,
    prefs: StoredPreferences,
}

impl FilePersister {
    /// File name of the preference document.
    pub const FILE_NAME: &'static str = "preferences.yml";

    /// Open the preference document in `dir`.
    ///
    /// A missing directory or file is treated as empty; nothing is created
    /// until the first write.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let path = dir.join(Self::FILE_NAME);

        let prefs = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StoredPreferences::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| SelectionError::StateParse {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
        } else {
            StoredPreferences::default()
        };

        debug!("Opened preferences at {}", path.display());
        Ok(Self { dir, prefs })
    }

    /// Directory holding the preference document.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the preference document.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(Self::FILE_NAME)
    }

    /// Write `prefs` using write-to-temp-then-rename, then adopt it as the
    /// loaded copy. On failure the loaded copy is left as it was.
    fn commit(&mut self, prefs: StoredPreferences) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.file_path();
        let content =
            serde_yaml::to_string(&prefs).map_err(|e| SelectionError::StateSerialize {
                message: e.to_string(),
            })?;

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote preferences to {}", path.display());
        self.prefs = prefs;
        Ok(())
    }
}

impl Persister for FilePersister {
    fn save(&mut self, value: PersistedValue) -> Result<()> {
        let mut next = self.prefs.clone();
        match value {
            PersistedValue::LastSelectedAsset(id) => next.last_selected_asset_id = Some(id),
            PersistedValue::LastSelectedAlbum(id) => next.last_selected_album_id = Some(id),
        }
        self.commit(next)
    }

    fn read(&self, key: PersistedKey) -> Option<PersistedValue> {
        match key {
            PersistedKey::LastSelectedAssetId => self
                .prefs
                .last_selected_asset_id
                .clone()
                .map(PersistedValue::LastSelectedAsset),
            PersistedKey::LastSelectedAlbumId => self
                .prefs
                .last_selected_album_id
                .clone()
                .map(PersistedValue::LastSelectedAlbum),
        }
    }

    fn clear(&mut self, key: PersistedKey) -> Result<()> {
        let mut next = self.prefs.clone();
        let had_value = match key {
            PersistedKey::LastSelectedAssetId => next.last_selected_asset_id.take().is_some(),
            PersistedKey::LastSelectedAlbumId => next.last_selected_album_id.take().is_some(),
        };

        if had_value {
            self.commit(next)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn asset(id: &str) -> PersistedValue {
        PersistedValue::LastSelectedAsset(AssetId::new(id))
    }

    fn album(id: &str) -> PersistedValue {
        PersistedValue::LastSelectedAlbum(AlbumId::new(id))
    }

    #[test]
    fn open_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let persister = FilePersister::open(temp.path().join("nested").join("domain")).unwrap();

        assert!(persister.read(PersistedKey::LastSelectedAssetId).is_none());
        assert!(persister.read(PersistedKey::LastSelectedAlbumId).is_none());
        assert!(!persister.file_path().exists());
    }

    #[test]
    fn save_persists_across_reopen() {
        let temp = TempDir::new().unwrap();

        let mut persister = FilePersister::open(temp.path()).unwrap();
        persister.save(asset("asset-1")).unwrap();
        persister.save(album("album-9")).unwrap();
        drop(persister);

        let reopened = FilePersister::open(temp.path()).unwrap();
        assert_eq!(
            reopened.read(PersistedKey::LastSelectedAssetId),
            Some(asset("asset-1"))
        );
        assert_eq!(
            reopened.read(PersistedKey::LastSelectedAlbumId),
            Some(album("album-9"))
        );
    }

    #[test]
    fn clear_persists_across_reopen() {
        let temp = TempDir::new().unwrap();

        let mut persister = FilePersister::open(temp.path()).unwrap();
        persister.save(asset("asset-1")).unwrap();
        persister.save(album("album-9")).unwrap();
        persister.clear(PersistedKey::LastSelectedAssetId).unwrap();

        let reopened = FilePersister::open(temp.path()).unwrap();
        assert!(reopened.read(PersistedKey::LastSelectedAssetId).is_none());
        assert_eq!(
            reopened.read(PersistedKey::LastSelectedAlbumId),
            Some(album("album-9"))
        );
    }

    #[test]
    fn clear_unset_key_does_not_create_file() {
        let temp = TempDir::new().unwrap();

        let mut persister = FilePersister::open(temp.path()).unwrap();
        persister.clear(PersistedKey::LastSelectedAlbumId).unwrap();

        assert!(!persister.file_path().exists());
    }

    #[test]
    fn document_uses_raw_key_names() {
        let temp = TempDir::new().unwrap();

        let mut persister = FilePersister::open(temp.path()).unwrap();
        persister.save(asset("asset-b")).unwrap();

        let content = fs::read_to_string(persister.file_path()).unwrap();
        insta::assert_snapshot!(content, @"lastSelectedAssetID: asset-b");
    }

    #[test]
    fn save_uses_atomic_write() {
        let temp = TempDir::new().unwrap();

        let mut persister = FilePersister::open(temp.path()).unwrap();
        persister.save(asset("asset-1")).unwrap();

        let temp_path = persister.file_path().with_extension("yml.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful save"
        );
        assert!(persister.file_path().exists());
    }

    #[test]
    fn failed_save_leaves_value_unset() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("blocker");
        fs::write(&not_a_dir, "regular file").unwrap();

        let mut persister = FilePersister::open(&not_a_dir).unwrap();
        let result = persister.save(asset("ghost"));

        assert!(matches!(result, Err(SelectionError::Io(_))));
        assert!(persister.read(PersistedKey::LastSelectedAssetId).is_none());

        let reopened = FilePersister::open(&not_a_dir).unwrap();
        assert!(reopened.read(PersistedKey::LastSelectedAssetId).is_none());
    }

    #[test]
    fn failed_clear_keeps_value() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("prefs");

        let mut persister = FilePersister::open(&dir).unwrap();
        persister.save(asset("kept")).unwrap();

        fs::remove_dir_all(&dir).unwrap();
        fs::write(&dir, "regular file").unwrap();

        assert!(persister.clear(PersistedKey::LastSelectedAssetId).is_err());
        assert_eq!(
            persister.read(PersistedKey::LastSelectedAssetId),
            Some(asset("kept"))
        );
    }

    #[test]
    fn empty_file_is_treated_as_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FilePersister::FILE_NAME), "").unwrap();

        let persister = FilePersister::open(temp.path()).unwrap();
        assert!(persister.read(PersistedKey::LastSelectedAssetId).is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(FilePersister::FILE_NAME);
        fs::write(&path, "lastSelectedAssetID: [unterminated").unwrap();

        let err = FilePersister::open(temp.path()).unwrap_err();
        assert!(matches!(err, SelectionError::StateParse { .. }));
        assert!(err.to_string().contains("preferences.yml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(FilePersister::FILE_NAME),
            "lastSelectedPhotoID: nope\n",
        )
        .unwrap();

        let err = FilePersister::open(temp.path()).unwrap_err();
        assert!(matches!(err, SelectionError::StateParse { .. }));
    }
}
