//! Item Chips Component
//!
//! Removable chips for the pending items of the add-class form.

use leptos::prelude::*;

/// One chip per pending name, in order. The × removes that chip only.
#[component]
pub fn ItemChips(
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(into)] on_remove: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="chip-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, name)| {
                        view! {
                            <span class="chip">
                                {name}
                                <button
                                    type="button"
                                    class="chip-x"
                                    on:click=move |_| on_remove.run(index)
                                >
                                    "x"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
