//! Schedule Operations
//!
//! Patches applied to a freshly loaded list, plus the day grouping used by
//! the views. A patch whose target has vanished is a no-op.

use chrono::Weekday;

use crate::domain::{find_mut, ClassRecord};
use crate::weekday::{parse_weekday, weekday_name, WEEKDAY_ORDER};

/// Rename a class. Returns the updated record.
pub fn rename_class(list: &mut [ClassRecord], class_id: &str, new_name: &str) -> Option<ClassRecord> {
    let name = new_name.trim();
    if name.is_empty() {
        return None;
    }
    let class = find_mut(list, class_id)?;
    class.name = name.to_string();
    Some(class.clone())
}

/// Set one item's checkbox state. Returns the updated class.
pub fn set_item_done(list: &mut [ClassRecord], class_id: &str, item_id: &str, done: bool) -> Option<ClassRecord> {
    let class = find_mut(list, class_id)?;
    let item = find_mut(&mut class.items, item_id)?;
    item.done = done;
    Some(class.clone())
}

/// Remove a class by id. Returns whether anything was removed.
pub fn remove_class(list: &mut Vec<ClassRecord>, class_id: &str) -> bool {
    let before = list.len();
    list.retain(|c| c.id != class_id);
    list.len() != before
}

/// Heading of a group in the all-classes view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKey {
    Day(Weekday),
    /// Stored day is not a weekday name
    Unscheduled,
}

impl DayKey {
    pub fn label(&self) -> &'static str {
        match self {
            DayKey::Day(day) => weekday_name(*day),
            DayKey::Unscheduled => "Unscheduled",
        }
    }
}

/// Classes sharing one heading, in collection order
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub key: DayKey,
    pub classes: Vec<ClassRecord>,
}

/// Group by weekday, Monday first, skipping empty days.
/// Unrecognized days go last under `Unscheduled`.
pub fn group_by_day(list: &[ClassRecord]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = WEEKDAY_ORDER
        .iter()
        .map(|day| DayGroup {
            key: DayKey::Day(*day),
            classes: classes_on(list, *day),
        })
        .filter(|g| !g.classes.is_empty())
        .collect();

    let unscheduled: Vec<ClassRecord> = list
        .iter()
        .filter(|c| parse_weekday(&c.day).is_none())
        .cloned()
        .collect();
    if !unscheduled.is_empty() {
        groups.push(DayGroup {
            key: DayKey::Unscheduled,
            classes: unscheduled,
        });
    }
    groups
}

/// Classes on the given weekday, in collection order
pub fn classes_on(list: &[ClassRecord], day: Weekday) -> Vec<ClassRecord> {
    let name = weekday_name(day);
    list.iter().filter(|c| c.day == name).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;

    fn class(id: &str, day: &str) -> ClassRecord {
        ClassRecord::new(
            id.to_string(),
            format!("Class {}", id),
            day.to_string(),
            vec![
                ItemRecord::new(format!("{}-a", id), "Reading".into()),
                ItemRecord::new(format!("{}-b", id), "Essay".into()),
            ],
        )
    }

    #[test]
    fn test_rename_class() {
        let mut list = vec![class("c1", "Monday"), class("c2", "Monday")];
        let updated = rename_class(&mut list, "c2", "  Geometry ").unwrap();
        assert_eq!(updated.name, "Geometry");
        assert_eq!(list[1].name, "Geometry");
        assert_eq!(list[0].name, "Class c1");
    }

    #[test]
    fn test_rename_ignores_blank_and_missing() {
        let mut list = vec![class("c1", "Monday")];
        assert!(rename_class(&mut list, "c1", "   ").is_none());
        assert!(rename_class(&mut list, "gone", "New").is_none());
        assert_eq!(list[0].name, "Class c1");
    }

    #[test]
    fn test_set_item_done_touches_only_target() {
        let mut list = vec![class("c1", "Monday"), class("c2", "Tuesday")];
        let updated = set_item_done(&mut list, "c2", "c2-b", true).unwrap();
        assert!(updated.items[1].done);

        let done: Vec<_> = list
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.done)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(done, ["c2-b"]);

        set_item_done(&mut list, "c2", "c2-b", false).unwrap();
        assert!(!list[1].items[1].done);
    }

    #[test]
    fn test_set_item_done_missing_targets() {
        let mut list = vec![class("c1", "Monday")];
        assert!(set_item_done(&mut list, "nope", "c1-a", true).is_none());
        assert!(set_item_done(&mut list, "c1", "nope", true).is_none());
        assert!(list[0].items.iter().all(|i| !i.done));
    }

    #[test]
    fn test_remove_class() {
        let mut list = vec![class("c1", "Monday"), class("c2", "Friday")];
        assert!(remove_class(&mut list, "c1"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "c2");
        assert!(!remove_class(&mut list, "c1"));
    }

    #[test]
    fn test_group_by_day_order_and_omission() {
        let list = vec![
            class("sun", "Sunday"),
            class("mon1", "Monday"),
            class("wed", "Wednesday"),
            class("mon2", "Monday"),
        ];
        let groups = group_by_day(&list);
        let labels: Vec<_> = groups.iter().map(|g| g.key.label()).collect();
        assert_eq!(labels, ["Monday", "Wednesday", "Sunday"]);

        let monday: Vec<_> = groups[0].classes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(monday, ["mon1", "mon2"]);
    }

    #[test]
    fn test_group_by_day_unscheduled_last() {
        let list = vec![class("x", "Someday"), class("fri", "Friday")];
        let groups = group_by_day(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, DayKey::Day(Weekday::Fri));
        assert_eq!(groups[1].key, DayKey::Unscheduled);
        assert_eq!(groups[1].classes[0].id, "x");
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn test_classes_on_filters_one_day() {
        let list: Vec<_> = WEEKDAY_ORDER
            .iter()
            .map(|d| class(weekday_name(*d), weekday_name(*d)))
            .chain(std::iter::once(class("thu2", "Thursday")))
            .collect();
        let thursday = classes_on(&list, Weekday::Thu);
        let ids: Vec<_> = thursday.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["Thursday", "thu2"]);
        assert!(classes_on(&[class("x", "Someday")], Weekday::Mon).is_empty());
    }
}
