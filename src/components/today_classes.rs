//! Today Page
//!
//! Classes whose day is the current local weekday.

use chrono::{Datelike, Local, Weekday};
use class_store::{classes_on, weekday_name};
use leptos::prelude::*;
use tracing::debug;

use crate::components::{ClassCard, EmptyCard};
use crate::context::use_app_context;

/// Current weekday in the browser's time zone
pub fn today() -> Weekday {
    Local::now().weekday()
}

#[component]
pub fn TodayClassesPage() -> impl IntoView {
    let ctx = use_app_context();

    let today_view = move || {
        let _ = ctx.reload_trigger.get();
        let day = today();
        let classes = classes_on(&ctx.repo().load(), day);
        debug!("Today ({}): {} classes", weekday_name(day), classes.len());

        if classes.is_empty() {
            return view! { <EmptyCard message="No classes today." /> }.into_any();
        }
        classes
            .into_iter()
            .map(|class| view! { <ClassCard record=class /> })
            .collect_view()
            .into_any()
    };

    view! { <div class="class-list">{today_view}</div> }
}
