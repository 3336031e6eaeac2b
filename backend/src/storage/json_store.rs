use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::traits::RecordStore;

/// File-backed record store: every key lives in `<directory>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)
                .with_context(|| format!("Failed to create data directory {}", directory.display()))?;
        }

        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Map a key to its file. Keys are restricted so they can never escape the directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            anyhow::bail!("Invalid storage key: '{}'", key);
        }

        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        // write-then-rename so readers never see a half-written file
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Stored {} bytes under key {}", value.len(), key);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonFileStore::new(temp_dir.path().join("data")).expect("Failed to open store");
        (temp_dir, store)
    }

    #[test]
    fn test_creates_missing_directory() {
        let (_temp_dir, store) = setup_test();
        assert!(store.directory().exists());
    }

    #[test]
    fn test_get_missing_key() {
        let (_temp_dir, store) = setup_test();
        assert_eq!(store.get("cowmanager_cows").unwrap(), None);
    }

    #[test]
    fn test_set_get_replace() {
        let (_temp_dir, store) = setup_test();

        store.set("cowmanager_cows", "[1]").unwrap();
        assert_eq!(store.get("cowmanager_cows").unwrap().as_deref(), Some("[1]"));

        store.set("cowmanager_cows", "[1,2]").unwrap();
        assert_eq!(store.get("cowmanager_cows").unwrap().as_deref(), Some("[1,2]"));

        // no temp file left behind
        assert!(!store.directory().join("cowmanager_cows.json.tmp").exists());
        assert!(store.directory().join("cowmanager_cows.json").exists());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = setup_test();

        store.set("cowmanager_current_user", "{}").unwrap();
        assert!(store.delete("cowmanager_current_user").unwrap());
        assert!(!store.delete("cowmanager_current_user").unwrap());
        assert_eq!(store.get("cowmanager_current_user").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp_dir, store) = setup_test();

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.delete("").is_err());
    }

    #[test]
    fn test_values_survive_reopen() {
        let (temp_dir, store) = setup_test();
        store.set("cowmanager_farmers", "[\"x\"]").unwrap();

        let reopened = JsonFileStore::new(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.get("cowmanager_farmers").unwrap().as_deref(), Some("[\"x\"]"));
    }
}
