//! Add-Class Draft
//!
//! Item names collected by the add-class form before the class is saved.

use crate::domain::{ClassRecord, ItemRecord};

/// Ordered, not-yet-persisted item names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingItems {
    names: Vec<String>,
}

impl PendingItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed name. Blank input is ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove the chip at `index`; duplicates elsewhere are kept
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Drain all names, leaving the draft empty
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }
}

/// Build a new class from form input.
///
/// `None` when the trimmed name or the day is empty. Every item starts
/// unchecked; `next_id` is called once for the class, then once per item.
pub fn build_class(
    name: &str,
    day: &str,
    items: &[String],
    mut next_id: impl FnMut() -> String,
) -> Option<ClassRecord> {
    let name = name.trim();
    if name.is_empty() || day.is_empty() {
        return None;
    }
    let id = next_id();
    let items = items
        .iter()
        .map(|item| ItemRecord::new(next_id(), item.clone()))
        .collect();
    Some(ClassRecord::new(id, name.to_string(), day.to_string(), items))
}
