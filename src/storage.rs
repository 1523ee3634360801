//! Browser Storage
//!
//! `localStorage` backend for the class repository.

use class_store::{ClassRepository, KeyValueStore, StoreError, StoreResult};

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

pub type Repo = ClassRepository<BrowserStorage>;

impl BrowserStorage {
    fn area() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::area()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
