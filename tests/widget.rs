//! Widget Browser Tests
//!
//! Mounts `App` into a fresh element and drives it with DOM events.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use todo_core::{EmptyInputPolicy, TodoConfig};
use todo_list_ui::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_widget(config: TodoConfig) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    leptos::mount::mount_to(root.clone(), move || view! { <App config=config /> }).forget();
    root
}

/// Let pending render effects run
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn text_field(root: &HtmlElement) -> HtmlInputElement {
    find(root, ".new-entry-input").unchecked_into()
}

fn rows(root: &HtmlElement) -> Vec<Element> {
    let list = root.query_selector_all(".todo-entry").unwrap();
    (0..list.length())
        .map(|i| list.item(i).unwrap().unchecked_into())
        .collect()
}

fn row_text(row: &Element) -> String {
    row.query_selector(".todo-text").unwrap().unwrap().text_content().unwrap_or_default()
}

fn is_marked(row: &Element) -> bool {
    row.class_list().contains("strikethrough")
}

fn checkbox(row: &Element) -> HtmlInputElement {
    row.query_selector(".todo-checkbox").unwrap().unwrap().unchecked_into()
}

async fn add(root: &HtmlElement, text: &str) {
    let field = text_field(root);
    field.set_value(text);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let ev = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    field.dispatch_event(&ev).unwrap();
    settle().await;

    find(root, ".add-btn").unchecked_into::<HtmlElement>().click();
    settle().await;
}

async fn click_checkbox(row: &Element) {
    checkbox(row).click();
    settle().await;
}

#[wasm_bindgen_test]
async fn add_appends_trimmed_row_and_clears_field() {
    let root = mount_widget(TodoConfig::default());
    assert!(rows(&root).is_empty());

    add(&root, "  Buy milk  ").await;

    let rows = rows(&root);
    assert_eq!(rows.len(), 1);
    assert_eq!(row_text(&rows[0]), "Buy milk");
    assert!(!is_marked(&rows[0]));
    assert_eq!(text_field(&root).value(), "");
}

#[wasm_bindgen_test]
async fn blank_input_is_rejected_by_default() {
    let root = mount_widget(TodoConfig::default());

    add(&root, "").await;
    add(&root, "   ").await;

    assert!(rows(&root).is_empty());
    assert_eq!(text_field(&root).value(), "");
}

#[wasm_bindgen_test]
async fn blank_input_accepted_when_configured() {
    let config = TodoConfig {
        empty_input: EmptyInputPolicy::Accept,
        ..TodoConfig::default()
    };
    let root = mount_widget(config);

    add(&root, "   ").await;

    let rows = rows(&root);
    assert_eq!(rows.len(), 1);
    assert_eq!(row_text(&rows[0]), "");
}

#[wasm_bindgen_test]
async fn double_toggle_unmarks() {
    let root = mount_widget(TodoConfig::default());
    add(&root, "Read book").await;

    let row = rows(&root).remove(0);
    click_checkbox(&row).await;
    assert!(is_marked(&row));
    click_checkbox(&row).await;
    assert!(!is_marked(&row));
    assert!(!checkbox(&row).checked());
}

#[wasm_bindgen_test]
async fn milk_and_dog_scenario() {
    let root = mount_widget(TodoConfig::default());

    add(&root, "Buy milk").await;
    let first = rows(&root).remove(0);
    assert_eq!(row_text(&first), "Buy milk");
    assert!(!is_marked(&first));

    click_checkbox(&first).await;
    assert!(is_marked(&first));

    add(&root, "Walk dog").await;
    let all = rows(&root);
    assert_eq!(all.len(), 2);
    assert_eq!(row_text(&all[1]), "Walk dog");
    assert!(is_marked(&all[0]));
    assert!(!is_marked(&all[1]));
    // The first row keeps its node and checkbox state across the add
    assert!(checkbox(&all[0]).checked());
}

#[wasm_bindgen_test]
async fn toggling_one_row_leaves_others() {
    let root = mount_widget(TodoConfig::default());
    add(&root, "A").await;
    add(&root, "B").await;
    add(&root, "C").await;

    let all = rows(&root);
    click_checkbox(&all[1]).await;

    assert!(!is_marked(&all[0]));
    assert!(is_marked(&all[1]));
    assert!(!is_marked(&all[2]));
}

#[wasm_bindgen_test]
async fn checkbox_ids_are_unique() {
    let root = mount_widget(TodoConfig::default());
    add(&root, "A").await;
    add(&root, "B").await;

    let all = rows(&root);
    assert_ne!(checkbox(&all[0]).id(), checkbox(&all[1]).id());
}

#[wasm_bindgen_test]
async fn delete_removes_row() {
    let root = mount_widget(TodoConfig::default());
    add(&root, "A").await;
    add(&root, "B").await;

    let first = rows(&root).remove(0);
    find(&first, ".todo-delete").unchecked_into::<HtmlElement>().click();
    settle().await;

    let all = rows(&root);
    assert_eq!(all.len(), 1);
    assert_eq!(row_text(&all[0]), "B");
}

#[wasm_bindgen_test]
async fn delete_glyph_inert_when_disabled() {
    let config = TodoConfig {
        delete_enabled: false,
        ..TodoConfig::default()
    };
    let root = mount_widget(config);
    add(&root, "A").await;

    let row = rows(&root).remove(0);
    let glyph = find(&row, ".todo-delete");
    assert_eq!(glyph.tag_name(), "SPAN");
    glyph.unchecked_into::<HtmlElement>().click();
    settle().await;

    assert_eq!(rows(&root).len(), 1);
}

#[wasm_bindgen_test]
async fn footer_counts_and_clear_completed() {
    let root = mount_widget(TodoConfig::default());
    add(&root, "A").await;
    add(&root, "B").await;
    click_checkbox(&rows(&root)[0]).await;

    let count = find(&root, ".item-count");
    assert_eq!(count.text_content().unwrap(), "2 items, 1 completed");

    find(&root, ".clear-completed-btn").unchecked_into::<HtmlElement>().click();
    settle().await;

    let all = rows(&root);
    assert_eq!(all.len(), 1);
    assert_eq!(row_text(&all[0]), "B");
    assert_eq!(count.text_content().unwrap(), "1 item, 0 completed");
}

#[wasm_bindgen_test]
async fn labels_point_at_own_checkbox() {
    let first = mount_widget(TodoConfig::default());
    let second = mount_widget(TodoConfig::default());
    add(&first, "A").await;
    add(&second, "A").await;

    let first_box = checkbox(&rows(&first)[0]);
    let second_box = checkbox(&rows(&second)[0]);
    assert_ne!(first_box.id(), second_box.id());

    for root in [&first, &second] {
        let row = rows(root).remove(0);
        let label = find(&row, "label");
        assert_eq!(label.get_attribute("for").unwrap(), checkbox(&row).id());
    }

    // Clicking the first widget's label toggles only its own row
    find(&rows(&first)[0], "label").unchecked_into::<HtmlElement>().click();
    settle().await;
    assert!(is_marked(&rows(&first)[0]));
    assert!(!is_marked(&rows(&second)[0]));
}
