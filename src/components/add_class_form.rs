//! Add Class Form Component
//!
//! Name, weekday and a list of item chips. Saving appends one class to
//! storage and resets the form.

use class_store::{build_class, weekday_name, WEEKDAY_ORDER};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info, warn};

use crate::components::ItemChips;
use crate::context::use_app_context;
use crate::ids::new_id;
use crate::store::{AddClassState, AddClassStateStoreFields};

/// Keys in the item input that add the typed item
pub fn is_add_item_key(key: &str) -> bool {
    matches!(key, "Enter" | ",")
}

#[component]
pub fn AddClassForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(AddClassState::default());
    // Replacing the handle drops the previous timer, which cancels it
    let flash_timer = StoredValue::new_local(None::<Timeout>);

    let add_item = move || {
        let raw = store.item_input().get();
        if store.pending().write().add(&raw) {
            store.item_input().set(String::new());
        }
    };

    let remove_item = Callback::new(move |index: usize| {
        store.pending().write().remove_at(index);
    });

    let on_item_key = move |ev: web_sys::KeyboardEvent| {
        if is_add_item_key(&ev.key()) {
            ev.prevent_default();
            add_item();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = store.name().get();
        let day = store.day().get();
        let pending = store.pending().get();

        let Some(class) = build_class(&name, &day, pending.as_slice(), new_id) else {
            debug!("Add class abandoned: name or day missing");
            return;
        };

        let summary = format!("'{}' on {} with {} items", class.name, class.day, class.items.len());
        if let Err(e) = ctx.repo().add(class) {
            warn!("Class {} not saved: {}", summary, e);
            return;
        }
        info!("Saved class {}", summary);

        store.flash().set(Some(ctx.config.saved_message.to_string()));
        store.name().set(String::new());
        store.day().set(String::new());
        store.pending().write().clear();

        let timeout = Timeout::new(ctx.config.saved_message_ms, move || store.flash().set(None));
        flash_timer.set_value(Some(timeout));

        ctx.reload();
    };

    view! {
        <form class="add-class-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Class name"
                prop:value=move || store.name().get()
                on:input=move |ev| store.name().set(event_target_value(&ev))
            />

            <select
                prop:value=move || store.day().get()
                on:change=move |ev| store.day().set(event_target_value(&ev))
            >
                <option value="">"Select day"</option>
                {WEEKDAY_ORDER
                    .iter()
                    .map(|day| {
                        let name = weekday_name(*day);
                        view! { <option value=name>{name}</option> }
                    })
                    .collect_view()}
            </select>

            <div class="item-input-row">
                <input
                    type="text"
                    placeholder="Add item..."
                    prop:value=move || store.item_input().get()
                    on:input=move |ev| store.item_input().set(event_target_value(&ev))
                    on:keypress=on_item_key
                />
                <button type="button" class="add-item-btn" on:click=move |_| add_item()>
                    "Add Item"
                </button>
            </div>

            <ItemChips
                items=Signal::derive(move || store.pending().with(|p| p.as_slice().to_vec()))
                on_remove=remove_item
            />

            <button type="submit">"Save Class"</button>

            <p class="success-msg">{move || store.flash().get().unwrap_or_default()}</p>
        </form>
    }
}
