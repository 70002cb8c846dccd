use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("failed to write '{key}' to storage")]
    Write { key: String },
    #[error("failed to remove '{key}' from storage")]
    Remove { key: String },
}

/// String key/value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Session-only storage. Cloning shares the same map.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser local storage when the page may use it, memory otherwise.
#[derive(Clone, PartialEq)]
pub enum AppStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl AppStorage {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => AppStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, keeping preferences in memory for this session");
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, AppStorage::Local(_))
    }
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            AppStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            AppStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            AppStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_string() }),
            AppStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            AppStorage::Local(storage) => storage
                .remove_item(key)
                .map_err(|_| StorageError::Remove { key: key.to_string() }),
            AppStorage::Memory(memory) => memory.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("two"));
    }
}
