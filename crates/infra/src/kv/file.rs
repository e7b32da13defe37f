use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{KeyValueStore, StoreError};

/// Directory-backed store: one `<key>.json` file per key.
///
/// Writes land in a sibling temp file first and are renamed into place, so a
/// reader never sees a half-written catalog.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory at {dir:?}"))?;
        tracing::debug!(dir = %dir.display(), "opened file key-value store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("motordesk-kv-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn persists_across_handles() {
        let dir = scratch_dir();
        let store = FileKeyValueStore::open(&dir).unwrap();
        store.set("app_users", r#"{"ana":"1"}"#).unwrap();

        let reopened = FileKeyValueStore::open(&dir).unwrap();
        assert_eq!(
            reopened.get("app_users").unwrap().as_deref(),
            Some(r#"{"ana":"1"}"#)
        );
        assert!(dir.join("app_users.json").exists());
        assert!(!dir.join("app_users.json.tmp").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_key_and_remove_are_quiet() {
        let dir = scratch_dir();
        let store = FileKeyValueStore::open(&dir).unwrap();
        assert_eq!(store.get("current_user").unwrap(), None);
        store.remove("current_user").unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let dir = scratch_dir();
        let store = FileKeyValueStore::open(&dir).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
