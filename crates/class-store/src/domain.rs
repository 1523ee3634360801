//! Class and Item Records
//!
//! The persisted shapes. Field names are part of the storage format.

use serde::{Deserialize, Serialize};

use crate::weekday::parse_weekday;

/// Anything addressed by an opaque string id
pub trait Entity {
    fn id(&self) -> &str;
}

/// Find an entity by id, mutably
pub(crate) fn find_mut<'a, T: Entity>(list: &'a mut [T], id: &str) -> Option<&'a mut T> {
    list.iter_mut().find(|e| e.id() == id)
}

/// One checklist entry of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique within its class
    pub id: String,
    /// Label, fixed at creation
    pub name: String,
    /// Checkbox state
    #[serde(default)]
    pub done: bool,
}

impl ItemRecord {
    /// Create a new unchecked item
    pub fn new(id: String, name: String) -> Self {
        Self { id, name, done: false }
    }
}

impl Entity for ItemRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A class scheduled on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Unique within the stored collection
    pub id: String,
    /// Display name (renameable)
    pub name: String,
    /// Weekday name, e.g. "Monday"
    pub day: String,
    /// Checklist in display order
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ClassRecord {
    pub fn new(id: String, name: String, day: String, items: Vec<ItemRecord>) -> Self {
        Self { id, name, day, items }
    }

    /// Heading shown on a card: `Algebra (Monday)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.day)
    }

    /// Whether `day` names one of the seven weekdays
    pub fn has_known_day(&self) -> bool {
        parse_weekday(&self.day).is_some()
    }
}

impl Entity for ClassRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unchecked() {
        let item = ItemRecord::new("i1".to_string(), "HW1".to_string());
        assert_eq!(item.id(), "i1");
        assert!(!item.done);
    }

    #[test]
    fn test_class_title() {
        let class = ClassRecord::new("c1".into(), "Algebra".into(), "Monday".into(), vec![]);
        assert_eq!(class.title(), "Algebra (Monday)");
        assert!(class.has_known_day());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"c1","name":"Art","day":"Friday","items":[{"id":"i1","name":"Brushes"}]}"#;
        let class: ClassRecord = serde_json::from_str(json).unwrap();
        assert!(!class.items[0].done);

        let json = r#"{"id":"c2","name":"Gym","day":"Sunday"}"#;
        let class: ClassRecord = serde_json::from_str(json).unwrap();
        assert!(class.items.is_empty());
    }

    #[test]
    fn test_storage_field_names() {
        let class = ClassRecord::new(
            "c1".into(),
            "Algebra".into(),
            "Monday".into(),
            vec![ItemRecord::new("i1".into(), "HW1".into())],
        );
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["day"], "Monday");
        assert_eq!(json["items"][0]["name"], "HW1");
        assert_eq!(json["items"][0]["done"], false);
    }

    #[test]
    fn test_unknown_day_is_kept() {
        let class = ClassRecord::new("c1".into(), "Choir".into(), "Someday".into(), vec![]);
        assert!(!class.has_known_day());
        assert_eq!(class.day, "Someday");
    }
}
