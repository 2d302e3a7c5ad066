//! To-Do List App
//!
//! Root component: heading, input form, entry list and footer.

use leptos::prelude::*;
use todo_core::TodoConfig;

use crate::components::{EntryList, NewEntryForm};
use crate::context::WidgetContext;
use crate::store::{store_clear_completed, store_counts};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let ctx = WidgetContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    let clear_completed = move |_| {
        let removed = store_clear_completed(&ctx.store);
        web_sys::console::log_1(&format!("[APP] Cleared {} completed entries", removed).into());
    };

    view! {
        <div class="todo-app">
            <h1>{ctx.title()}</h1>

            <NewEntryForm />

            <EntryList />

            <footer class="todo-footer">
                <p class="item-count">
                    {move || {
                        let (total, completed) = store_counts(&ctx.store);
                        item_count_label(total, completed)
                    }}
                </p>
                <button type="button" class="clear-completed-btn" on:click=clear_completed>
                    "Clear completed"
                </button>
            </footer>
        </div>
    }
}

/// Footer text, e.g. "1 item, 0 completed"
pub fn item_count_label(total: usize, completed: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} completed", total, noun, completed)
}
