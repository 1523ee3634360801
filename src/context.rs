//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::storage::{BrowserStorage, Repo};

/// App-wide handles provided to every mounted page
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the class views must rebuild - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped whenever the class views must rebuild - write
    set_reload_trigger: WriteSignal<u32>,
    pub config: &'static AppConfig,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: &'static AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config,
        }
    }

    /// Trigger a rebuild of the class views
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// The persisted class list
    pub fn repo(&self) -> Repo {
        Repo::new(BrowserStorage, self.config.storage_key)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
