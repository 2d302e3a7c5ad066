//! To-Do List Frontend Entry Point

use leptos::prelude::*;
use todo_list_ui::context::config_from_document;
use todo_list_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    let config = config_from_document();
    mount_to_body(move || view! { <App config=config /> });
}
