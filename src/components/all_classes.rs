//! All Classes Page
//!
//! Every stored class, grouped under Monday..Sunday headings. The region is
//! rebuilt from storage on each reload.

use class_store::group_by_day;
use leptos::prelude::*;
use tracing::debug;

use crate::components::{ClassCard, EmptyCard};
use crate::context::use_app_context;

#[component]
pub fn AllClassesPage() -> impl IntoView {
    let ctx = use_app_context();

    let groups_view = move || {
        let trigger = ctx.reload_trigger.get();
        let list = ctx.repo().load();
        debug!("All classes: {} loaded, trigger={}", list.len(), trigger);

        if list.is_empty() {
            return view! { <EmptyCard message="No classes added yet." /> }.into_any();
        }

        group_by_day(&list)
            .into_iter()
            .map(|group| {
                view! {
                    <h2 class="day-heading">{group.key.label()}</h2>
                    {group
                        .classes
                        .into_iter()
                        .map(|class| view! { <ClassCard record=class show_delete=true /> })
                        .collect_view()}
                }
            })
            .collect_view()
            .into_any()
    };

    view! { <div class="class-list">{groups_view}</div> }
}
