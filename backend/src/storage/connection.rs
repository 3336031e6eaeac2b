use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

use super::json_store::JsonFileStore;
use super::memory_store::MemoryStore;
use super::traits::RecordStore;

/// The fixed keys of the record store
pub mod keys {
    pub const FARMERS: &str = "cowmanager_farmers";
    pub const COWS: &str = "cowmanager_cows";
    pub const INSEMINATIONS: &str = "cowmanager_inseminations";
    pub const CURRENT_USER: &str = "cowmanager_current_user";
}

/// A collection as read for an update: the entries that parsed, plus the
/// ones that did not, carried along untouched
#[derive(Debug)]
pub struct Collection<T> {
    pub items: Vec<T>,
    unreadable: Vec<Value>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unreadable: Vec::new(),
        }
    }
}

/// StoreConnection gives typed JSON access to a `RecordStore` and owns the
/// write lock shared by every repository built on it.
#[derive(Clone)]
pub struct StoreConnection {
    store: Arc<dyn RecordStore>,
    write_lock: Arc<Mutex<()>>,
}

impl StoreConnection {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open a file-backed store in `directory`
    pub fn open_json<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let store = JsonFileStore::new(directory.as_ref())?;
        info!("Opened record store at {}", store.directory().display());
        Ok(Self::new(Arc::new(store)))
    }

    /// Create a connection backed by an in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Hold this while doing a read-modify-write on any key
    pub fn write_guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| anyhow!("Store write lock poisoned"))
    }

    /// Read a whole collection for display. A missing key is an empty
    /// collection; entries that no longer parse are logged and skipped.
    pub fn read_all<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self.read_collection(key)?.items)
    }

    /// Read a collection for a read-modify-write. Entries that do not parse
    /// are kept aside verbatim so `write_collection` puts them back.
    ///
    /// A value that is not a JSON array at all is an error: nothing may be
    /// written over a collection that could not be read.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Collection<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Collection::default());
        };

        let entries: Vec<Value> = serde_json::from_str(&raw)
            .with_context(|| format!("Stored value under {} is not a valid collection", key))?;

        let mut collection = Collection::default();
        for entry in entries {
            match serde_json::from_value::<T>(entry.clone()) {
                Ok(item) => collection.items.push(item),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", key, e);
                    collection.unreadable.push(entry);
                }
            }
        }
        Ok(collection)
    }

    /// Write back a collection read with `read_collection`, unreadable
    /// entries included
    pub fn write_collection<T: Serialize>(&self, key: &str, collection: &Collection<T>) -> Result<()> {
        let mut entries = Vec::with_capacity(collection.items.len() + collection.unreadable.len());
        for item in &collection.items {
            entries.push(
                serde_json::to_value(item)
                    .with_context(|| format!("Failed to serialize entry for {}", key))?,
            );
        }
        entries.extend(collection.unreadable.iter().cloned());
        self.write_all(key, &entries)
    }

    /// Replace a whole collection
    pub fn write_all<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .with_context(|| format!("Failed to serialize collection for {}", key))?;
        self.store.set(key, &raw)
    }

    /// Read a single object. Unreadable values behave like a missing key.
    pub fn read_one<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Stored value under {} is unreadable, ignoring it: {}", key, e);
                Ok(None)
            }
        }
    }

    pub fn write_one<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for {}", key))?;
        self.store.set(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        self.store.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let connection = StoreConnection::in_memory();
        let items: Vec<Item> = connection.read_all(keys::COWS).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_collection_roundtrip_keeps_order() {
        let connection = StoreConnection::in_memory();
        let items = vec![Item { id: "b".into() }, Item { id: "a".into() }];

        connection.write_all(keys::COWS, &items).unwrap();
        let loaded: Vec<Item> = connection.read_all(keys::COWS).unwrap();
        assert_eq!(loaded, items);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Named {
        id: String,
        name: String,
    }

    #[test]
    fn test_unparseable_collection_is_an_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::INSEMINATIONS, "not json").unwrap();
        let connection = StoreConnection::new(store.clone());

        assert!(connection.read_all::<Item>(keys::INSEMINATIONS).is_err());
        assert!(connection.read_collection::<Item>(keys::INSEMINATIONS).is_err());
        assert_eq!(store.get(keys::INSEMINATIONS).unwrap().as_deref(), Some("not json"));

        let one: Option<Item> = connection.read_one(keys::INSEMINATIONS).unwrap();
        assert!(one.is_none());
    }

    #[test]
    fn test_bad_entries_are_skipped_and_preserved() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(keys::COWS, r#"[{"id":"a","name":"Lakshmi"},{"id":"b"},{"id":"c","name":"Gauri"}]"#)
            .unwrap();
        let connection = StoreConnection::new(store.clone());

        let listed: Vec<Named> = connection.read_all(keys::COWS).unwrap();
        let ids: Vec<&str> = listed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let mut collection: Collection<Named> = connection.read_collection(keys::COWS).unwrap();
        collection.items.push(Named { id: "d".into(), name: "Kamdhenu".into() });
        connection.write_collection(keys::COWS, &collection).unwrap();

        let stored: Vec<Value> = serde_json::from_str(&store.get(keys::COWS).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 4);
        assert!(stored.contains(&serde_json::json!({"id": "b"})));
    }

    #[test]
    fn test_single_value_and_remove() {
        let connection = StoreConnection::in_memory();
        connection.write_one(keys::CURRENT_USER, &Item { id: "x".into() }).unwrap();

        let loaded: Option<Item> = connection.read_one(keys::CURRENT_USER).unwrap();
        assert_eq!(loaded, Some(Item { id: "x".into() }));

        assert!(connection.remove(keys::CURRENT_USER).unwrap());
        let loaded: Option<Item> = connection.read_one(keys::CURRENT_USER).unwrap();
        assert!(loaded.is_none());
    }
}
