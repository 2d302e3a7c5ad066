//! Entry Row Component
//!
//! Checkbox, text and delete glyph for one entry.

use leptos::prelude::*;
use todo_core::EntryId;

use crate::context::use_widget_context;
use crate::store::{store_is_completed, store_remove_entry, store_set_completed};

/// A single entry row; gets the `strikethrough` class while completed
#[component]
pub fn EntryRow(id: EntryId, text: String) -> impl IntoView {
    let ctx = use_widget_context();

    let dom_id = id.dom_id(&ctx.dom_prefix());
    let label_for = dom_id.clone();
    let completed = move || store_is_completed(&ctx.store, id);

    // Change (not click) so keyboard and label toggles land on the final state
    let on_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        if let Err(e) = store_set_completed(&ctx.store, id, checked) {
            web_sys::console::warn_1(&format!("[ROW] {}", e).into());
        }
    };

    let delete_glyph = if ctx.delete_enabled() {
        view! {
            <button
                type="button"
                class="todo-delete"
                title="Remove"
                on:click=move |_| {
                    if let Err(e) = store_remove_entry(&ctx.store, id) {
                        web_sys::console::warn_1(&format!("[ROW] {}", e).into());
                    }
                }
            >
                "❌"
            </button>
        }
        .into_any()
    } else {
        view! { <span class="todo-delete">"❌"</span> }.into_any()
    };

    view! {
        <div class=move || if completed() { "todo-entry strikethrough" } else { "todo-entry" }>
            <label for=label_for>
                <input
                    type="checkbox"
                    class="todo-checkbox"
                    id=dom_id
                    prop:checked=completed
                    on:change=on_change
                />
            </label>
            <span class="todo-text">{text}</span>
            {delete_glyph}
        </div>
    }
}
