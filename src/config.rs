//! App Configuration
//!
//! Compile-time settings shared by every page.

use tracing::Level;

#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// `localStorage` key holding the class list
    pub storage_key: &'static str,
    /// Shown after a class is saved
    pub saved_message: &'static str,
    /// How long the saved message stays up
    pub saved_message_ms: u32,
    /// Element ids of the page regions
    pub all_classes_region: &'static str,
    pub today_region: &'static str,
    pub add_class_region: &'static str,
    pub log_level: Level,
}

impl AppConfig {
    pub const DEFAULT: Self = Self {
        storage_key: "classes",
        saved_message: "Class saved!",
        saved_message_ms: 2000,
        all_classes_region: "all-classes",
        today_region: "today-classes",
        add_class_region: "add-class",
        log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
    };
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub static CONFIG: AppConfig = AppConfig::DEFAULT;
