//! New Entry Form Component
//!
//! Text field plus "Add" button. Submitting appends an entry and clears
//! the field.

use leptos::prelude::*;

use crate::context::use_widget_context;
use crate::store::store_add_entry;

#[component]
pub fn NewEntryForm() -> impl IntoView {
    let ctx = use_widget_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match store_add_entry(&ctx.store, &text) {
            Ok(id) => {
                web_sys::console::log_1(&format!("[FORM] Added entry {}", id).into());
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[FORM] Submission ignored: {}", e).into());
            }
        }
        // Cleared either way; a rejected submission was only whitespace
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-entry-form" on:submit=add_entry>
            <input
                type="text"
                class="new-entry-input"
                placeholder=ctx.placeholder()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
