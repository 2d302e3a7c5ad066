//! Entry List Component
//!
//! Rows keyed by entry id: adding an entry mounts exactly one new row and
//! leaves existing rows (and their handlers) untouched.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::context::use_widget_context;
use crate::store::store_entries;

#[component]
pub fn EntryList() -> impl IntoView {
    let ctx = use_widget_context();

    let entries = move || store_entries(&ctx.store);

    view! {
        <div class="todo-items">
            <For
                each=entries
                key=|entry| entry.id
                children=move |entry| view! { <EntryRow id=entry.id text=entry.text /> }
            />
        </div>
    }
}
