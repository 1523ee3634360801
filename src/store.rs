//! Add-Class Form State
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use class_store::PendingItems;
use reactive_stores::Store;

/// Everything the add-class form holds before a class is saved
#[derive(Clone, Debug, Default, Store)]
pub struct AddClassState {
    pub name: String,
    /// Empty until a weekday is picked
    pub day: String,
    /// Text in the item input
    pub item_input: String,
    /// Chips waiting to become items
    pub pending: PendingItems,
    /// Transient confirmation text
    pub flash: Option<String>,
}

pub type AddClassStore = Store<AddClassState>;
