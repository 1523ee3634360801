//! Rename Prompt Component
//!
//! Inline "Edit class name:" form opened from a card's menu.

use leptos::prelude::*;

#[component]
pub fn RenamePrompt(
    #[prop(into)] initial: String,
    #[prop(into)] on_confirm: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (value, set_value) = signal(initial);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_confirm.run(value.get());
    };

    view! {
        <form class="rename-prompt" on:submit=on_submit>
            <label>
                "Edit class name:"
                <input
                    type="text"
                    autofocus=true
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"OK"</button>
            <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
        </form>
    }
}
