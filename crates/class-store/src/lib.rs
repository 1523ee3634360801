//! Class Store
//!
//! Domain and repository layer for the class tracker:
//! - domain: class and item records
//! - weekday: fixed Monday..Sunday ordering
//! - schedule: list operations used by the card and page views
//! - draft: pending items of the add-class form
//! - repository: key-value persistence of the whole class list
//!
//! Nothing in here touches the browser, so it all runs under `cargo test`.

mod domain;
mod draft;
mod error;
mod ids;
mod repository;
mod schedule;
mod weekday;

pub use domain::{ClassRecord, ItemRecord};
pub use draft::{build_class, PendingItems};
pub use error::{StoreError, StoreResult};
pub use ids::compose_id;
pub use repository::{ClassRepository, KeyValueStore, MemoryStore};
pub use schedule::{classes_on, group_by_day, remove_class, rename_class, set_item_done, DayGroup, DayKey};
pub use weekday::{parse_weekday, weekday_name, WEEKDAY_ORDER};
