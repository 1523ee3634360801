//! Class Repository
//!
//! The whole class list lives under one key as a JSON array. Every write
//! replaces it; there is no partial update path.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::ClassRecord;
use crate::error::{StoreError, StoreResult};

/// String key-value backend (browser `localStorage` or in-memory)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory backend, used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate hand-edited storage
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored value
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

/// Single access point for the persisted class list
#[derive(Debug, Clone, Copy)]
pub struct ClassRepository<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> ClassRepository<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current list. Missing or unreadable data is an empty list.
    pub fn load(&self) -> Vec<ClassRecord> {
        let raw = match self.store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Reading '{}' failed, using empty list: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ClassRecord>>(&raw) {
            Ok(list) => {
                let unknown = list.iter().filter(|c| !c.has_known_day()).count();
                if unknown > 0 {
                    warn!("{} stored class(es) have an unrecognized day", unknown);
                }
                list
            }
            Err(e) => {
                warn!("Stored '{}' is malformed, using empty list: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list
    pub fn save(&self, list: &[ClassRecord]) -> StoreResult<()> {
        let json = serde_json::to_string(list).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.store.set_item(self.key, &json)?;
        debug!("Saved {} classes", list.len());
        Ok(())
    }

    /// Reload, patch, persist.
    ///
    /// `f` returns `None` when there is nothing to change (e.g. the target
    /// record is gone); the list is then left untouched.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<ClassRecord>) -> Option<R>) -> StoreResult<Option<R>> {
        let mut list = self.load();
        match f(&mut list) {
            Some(result) => {
                self.save(&list)?;
                Ok(Some(result))
            }
            None => {
                debug!("Mutation found nothing to change");
                Ok(None)
            }
        }
    }

    /// Append a new class
    pub fn add(&self, class: ClassRecord) -> StoreResult<()> {
        self.mutate(|list| {
            list.push(class);
            Some(())
        })
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;

    const KEY: &str = "classes";

    fn algebra() -> ClassRecord {
        ClassRecord::new(
            "c1".into(),
            "Algebra".into(),
            "Monday".into(),
            vec![
                ItemRecord::new("i1".into(), "HW1".into()),
                ItemRecord::new("i2".into(), "HW2".into()),
            ],
        )
    }

    /// Backend whose storage area cannot be reached at all
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = ClassRepository::new(MemoryStore::new(), KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_data_is_empty() {
        for raw in ["not json", "null", "{\"id\":1}", "[{\"name\":\"no id\"}]", ""] {
            let repo = ClassRepository::new(MemoryStore::with_entry(KEY, raw), KEY);
            assert!(repo.load().is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_load_unreachable_store_is_empty() {
        let repo = ClassRepository::new(BrokenStore, KEY);
        assert!(repo.load().is_empty());
        assert!(matches!(repo.save(&[algebra()]), Err(StoreError::Write(_))));
    }

    #[test]
    fn test_save_then_load_is_identity() {
        let repo = ClassRepository::new(MemoryStore::new(), KEY);
        let mut list = vec![algebra()];
        list[0].items[1].done = true;
        repo.save(&list).unwrap();
        assert_eq!(repo.load(), list);

        repo.save(&repo.load()).unwrap();
        assert_eq!(repo.load(), list);
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let repo = ClassRepository::new(MemoryStore::new(), KEY);
        repo.save(&[algebra()]).unwrap();
        repo.save(&[]).unwrap();
        assert_eq!(repo.store().raw(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_mutate_none_leaves_storage_untouched() {
        let repo = ClassRepository::new(MemoryStore::with_entry(KEY, "garbage"), KEY);
        let result = repo.mutate(|_| None::<()>).unwrap();
        assert!(result.is_none());
        assert_eq!(repo.store().raw(KEY).as_deref(), Some("garbage"));
    }

    #[test]
    fn test_mutate_reloads_before_patching() {
        let store = MemoryStore::new();
        let first = ClassRepository::new(&store, KEY);
        let second = ClassRepository::new(&store, KEY);

        first.add(algebra()).unwrap();
        let mut other = algebra();
        other.id = "c2".into();
        second.add(other).unwrap();

        let ids: Vec<_> = first.load().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["c1", "c2"]);
    }

    #[test]
    fn test_unknown_day_survives_round_trip() {
        let raw = r#"[{"id":"c1","name":"Choir","day":"Funday","items":[]}]"#;
        let repo = ClassRepository::new(MemoryStore::with_entry(KEY, raw), KEY);
        let list = repo.load();
        assert_eq!(list[0].day, "Funday");
        repo.save(&list).unwrap();
        assert_eq!(repo.load()[0].day, "Funday");
    }
}
