//! Class Card Component
//!
//! One class with its checklist. Every action reloads the stored list,
//! patches it and saves it back; an action whose class (or item) has been
//! removed elsewhere is dropped.

use class_store::{remove_class, rename_class, set_item_done, ClassRecord};
use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::components::{DeleteConfirmButton, RenamePrompt};
use crate::context::use_app_context;

/// Question asked before deleting
pub fn delete_question(name: &str) -> String {
    format!("Delete class \"{}\"?", name)
}

/// Placeholder card for an empty view
#[component]
pub fn EmptyCard(message: &'static str) -> impl IntoView {
    view! {
        <div class="class-card">
            <p class="muted">{message}</p>
        </div>
    }
}

#[component]
pub fn ClassCard(
    record: ClassRecord,
    /// Offer the "Delete Class" control
    #[prop(optional)]
    show_delete: bool,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = record.id.clone();
    let record = RwSignal::new(record);
    let (renaming, set_renaming) = signal(false);
    let (removed, set_removed) = signal(false);

    let on_rename = {
        let id = id.clone();
        Callback::new(move |new_name: String| {
            set_renaming.set(false);
            if new_name.trim().is_empty() {
                return;
            }
            match ctx.repo().mutate(|list| rename_class(list, &id, &new_name)) {
                Ok(Some(updated)) => record.set(updated),
                Ok(None) => debug!("Class {} is gone, rename dropped", id),
                Err(e) => warn!("Rename of class {} not saved: {}", id, e),
            }
        })
    };

    let on_toggle = {
        let id = id.clone();
        Callback::new(move |(item_id, done): (String, bool)| {
            match ctx.repo().mutate(|list| set_item_done(list, &id, &item_id, done)) {
                Ok(Some(updated)) => record.set(updated),
                Ok(None) => debug!("Item {}/{} is gone, toggle dropped", id, item_id),
                Err(e) => warn!("Toggle of {}/{} not saved: {}", id, item_id, e),
            }
        })
    };

    let on_delete = Callback::new(move |_: ()| {
        match ctx.repo().mutate(|list| remove_class(list, &id).then_some(())) {
            Ok(Some(())) => info!("Deleted class {}", id),
            Ok(None) => debug!("Class {} was already deleted", id),
            Err(e) => warn!("Delete of class {} not saved: {}", id, e),
        }
        set_removed.set(true);
        ctx.reload();
    });

    let items_view = move || {
        record.with(|class| {
            if class.items.is_empty() {
                return view! { <p class="muted">"No items yet."</p> }.into_any();
            }
            view! {
                <ul>
                    {class
                        .items
                        .iter()
                        .map(|item| {
                            let item_id = item.id.clone();
                            view! {
                                <li>
                                    <input
                                        type="checkbox"
                                        prop:checked=item.done
                                        on:change=move |ev| {
                                            on_toggle.run((item_id.clone(), event_target_checked(&ev)));
                                        }
                                    />
                                    " "
                                    {item.name.clone()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        })
    };

    view! {
        <Show when=move || !removed.get()>
            <div class="class-card">
                <button
                    type="button"
                    class="card-menu-btn"
                    title="Edit Class"
                    on:click=move |_| set_renaming.update(|open| *open = !*open)
                >
                    "⋮"
                </button>

                <Show when=move || renaming.get()>
                    <RenamePrompt
                        initial=record.with_untracked(|c| c.name.clone())
                        on_confirm=on_rename
                        on_cancel=move |_: ()| set_renaming.set(false)
                    />
                </Show>

                <h3>{move || record.with(|c| c.title())}</h3>

                {items_view}

                {show_delete.then(|| view! {
                    <DeleteConfirmButton
                        label="Delete Class"
                        question=Signal::derive(move || record.with(|c| delete_question(&c.name)))
                        on_confirm=on_delete
                    />
                })}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_question_quotes_name() {
        assert_eq!(delete_question("Algebra"), "Delete class \"Algebra\"?");
    }
}
