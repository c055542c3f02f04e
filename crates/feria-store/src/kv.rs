//! Key-value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::StoreError;

/// Name of the default store region.
pub const DEFAULT_STORE: &str = "default";

/// Origin-scoped key-value store with JSON-serialized values.
///
/// On `wasm32` this wraps the Spin key-value store. Natively it attaches to
/// a named in-memory region shared across the process, mirroring how
/// origin-scoped browser storage is shared between sessions, so restore
/// paths stay testable off-platform.
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    region: memory::Region,
}

impl Store {
    /// Open the default store.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(DEFAULT_STORE)
    }

    /// Open a named store.
    #[cfg(target_arch = "wasm32")]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named store.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        Ok(Self {
            region: memory::Region::attach(name),
        })
    }

    /// Read and deserialize the value at `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and write `value` at `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        debug!(key, bytes = bytes.len(), "store write");
        self.set_raw(key, &bytes)
    }

    /// Delete `key`. Deleting a missing key is not an error.
    #[cfg(target_arch = "wasm32")]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store
            .delete(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    /// Delete `key`. Deleting a missing key is not an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.region.delete(key);
        Ok(())
    }

    /// Check if `key` exists.
    #[cfg(target_arch = "wasm32")]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store
            .exists(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    /// Check if `key` exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.region.exists(key))
    }

    #[cfg(target_arch = "wasm32")]
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.store
            .get(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.region.get(key))
    }

    #[cfg(target_arch = "wasm32")]
    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.store
            .set(key, bytes)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.region.set(key, bytes);
        Ok(())
    }
}

/// Process-wide named regions standing in for platform storage.
#[cfg(not(target_arch = "wasm32"))]
mod memory {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, OnceLock};

    type Map = HashMap<String, Vec<u8>>;

    static REGIONS: OnceLock<Mutex<HashMap<String, Arc<Mutex<Map>>>>> = OnceLock::new();

    /// Handle to one named region.
    pub struct Region(Arc<Mutex<Map>>);

    impl Region {
        pub fn attach(name: &str) -> Self {
            let regions = REGIONS.get_or_init(|| Mutex::new(HashMap::new()));
            let mut regions = regions.lock().unwrap_or_else(|e| e.into_inner());
            Self(regions.entry(name.to_string()).or_default().clone())
        }

        pub fn get(&self, key: &str) -> Option<Vec<u8>> {
            self.map().get(key).cloned()
        }

        pub fn set(&self, key: &str, bytes: &[u8]) {
            self.map().insert(key.to_string(), bytes.to_vec());
        }

        pub fn delete(&self, key: &str) {
            self.map().remove(key);
        }

        pub fn exists(&self, key: &str) -> bool {
            self.map().contains_key(key)
        }

        fn map(&self) -> std::sync::MutexGuard<'_, Map> {
            self.0.lock().unwrap_or_else(|e| e.into_inner())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        items: Vec<String>,
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let store = Store::open("kv-missing").unwrap();
        let value: Option<Snapshot> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_round_trip() {
        let store = Store::open("kv-roundtrip").unwrap();
        let snapshot = Snapshot {
            items: vec!["yogurt".to_string(), "arepa".to_string()],
        };
        store.set("cart", &snapshot).unwrap();
        let back: Option<Snapshot> = store.get("cart").unwrap();
        assert_eq!(back, Some(snapshot));
    }

    #[test]
    fn test_same_region_is_shared_between_opens() {
        let writer = Store::open("kv-shared").unwrap();
        writer.set("key", &42_i64).unwrap();

        let reader = Store::open("kv-shared").unwrap();
        let value: Option<i64> = reader.get("key").unwrap();
        assert_eq!(value, Some(42));
    }

    #[test]
    fn test_regions_are_isolated() {
        let a = Store::open("kv-isolated-a").unwrap();
        let b = Store::open("kv-isolated-b").unwrap();
        a.set("key", &1_i64).unwrap();
        let value: Option<i64> = b.get("key").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::open("kv-delete").unwrap();
        store.set("key", &"value").unwrap();
        assert!(store.exists("key").unwrap());

        store.delete("key").unwrap();
        assert!(!store.exists("key").unwrap());

        // Deleting again is fine.
        store.delete("key").unwrap();
    }

    #[test]
    fn test_type_mismatch_is_serialize_error() {
        let store = Store::open("kv-mismatch").unwrap();
        store.set("key", &"just a string").unwrap();
        let result: Result<Option<Snapshot>, StoreError> = store.get("key");
        assert!(matches!(result, Err(StoreError::SerializeError(_))));
    }
}
