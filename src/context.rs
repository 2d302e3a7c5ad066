//! Widget Context
//!
//! Handles created once by `App` and provided to its children, so no
//! component looks elements or state up by a global name.

use std::sync::atomic::{AtomicU32, Ordering};

use leptos::prelude::*;
use todo_core::TodoConfig;

use crate::store::{TodoState, TodoStore};

/// Attribute on `<body>` holding the JSON configuration
pub const CONFIG_ATTRIBUTE: &str = "data-todo-config";

/// Widgets mounted so far in this page; keeps DOM ids distinct between them
static NEXT_INSTANCE: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy)]
pub struct WidgetContext {
    /// Entry list state
    pub store: TodoStore,
    config: StoredValue<TodoConfig>,
    instance: u32,
}

impl WidgetContext {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            store: TodoStore::new(TodoState::new(config.empty_input)),
            config: StoredValue::new(config),
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Prefix for element ids rendered by this widget
    pub fn dom_prefix(&self) -> String {
        format!("todo-{}", self.instance)
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.title.clone())
    }

    pub fn placeholder(&self) -> String {
        self.config.with_value(|c| c.placeholder.clone())
    }

    /// Whether the delete glyph removes its row
    pub fn delete_enabled(&self) -> bool {
        self.config.with_value(|c| c.delete_enabled)
    }
}

/// Get the widget context provided by `App`
pub fn use_widget_context() -> WidgetContext {
    expect_context::<WidgetContext>()
}

/// Read configuration from the `data-todo-config` attribute of `<body>`.
///
/// Falls back to defaults when the attribute is missing or malformed.
pub fn config_from_document() -> TodoConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute(CONFIG_ATTRIBUTE));

    match raw {
        Some(json) => TodoConfig::from_json(&json).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[APP] {}, using defaults", e).into());
            TodoConfig::default()
        }),
        None => TodoConfig::default(),
    }
}
