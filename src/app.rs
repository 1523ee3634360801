//! Class Tracker Bootstrap
//!
//! Mounts each page into its region of the host document. A page whose
//! region is missing is skipped.

use leptos::mount::mount_to;
use leptos::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;

use crate::components::{AddClassForm, AllClassesPage, TodayClassesPage};
use crate::config::AppConfig;
use crate::context::AppContext;

pub fn start(config: &'static AppConfig) {
    let ctx = AppContext::new(signal(0u32), config);

    listen_for_other_tabs(ctx);

    mount_region(config.all_classes_region, move || {
        provide_context(ctx);
        view! { <AllClassesPage /> }
    });
    mount_region(config.today_region, move || {
        provide_context(ctx);
        view! { <TodayClassesPage /> }
    });
    mount_region(config.add_class_region, move || {
        provide_context(ctx);
        view! { <AddClassForm /> }
    });
}

fn mount_region<F, N>(id: &str, page: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let Some(element) = document().get_element_by_id(id) else {
        debug!("No #{} on this page, skipping", id);
        return;
    };
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(parent) => {
            mount_to(parent, page).forget();
            info!("Mounted #{}", id);
        }
        Err(_) => warn!("#{} is not an HTML element", id),
    }
}

/// Another tab rewrote the class list: rebuild the views from storage
fn listen_for_other_tabs(ctx: AppContext) {
    let key = ctx.config.storage_key;
    let _ = window_event_listener(leptos::ev::storage, move |ev| {
        // A `None` key means the whole storage area was cleared
        if ev.key().map_or(true, |k| k == key) {
            debug!("Storage changed in another tab, reloading");
            ctx.reload();
        }
    });
}
