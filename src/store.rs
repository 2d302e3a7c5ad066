//! Entry Store
//!
//! Uses Leptos reactive_stores so every view reading the list re-runs
//! when an entry is added, toggled or removed.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{EmptyInputPolicy, Entry, EntryId, TodoError, TodoList};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Entries in display order
    pub list: TodoList,
}

impl TodoState {
    pub fn new(policy: EmptyInputPolicy) -> Self {
        Self {
            list: TodoList::with_policy(policy),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Append a new entry from raw input text
pub fn store_add_entry(store: &TodoStore, raw: &str) -> Result<EntryId, TodoError> {
    store.list().write().add(raw)
}

/// Mirror a checkbox's final checked state onto the entry
pub fn store_set_completed(store: &TodoStore, id: EntryId, completed: bool) -> Result<(), TodoError> {
    store.list().write().set_completed(id, completed)
}

pub fn store_remove_entry(store: &TodoStore, id: EntryId) -> Result<Entry, TodoError> {
    store.list().write().remove(id)
}

pub fn store_clear_completed(store: &TodoStore) -> usize {
    store.list().write().clear_completed()
}

/// Snapshot of all entries (tracked)
pub fn store_entries(store: &TodoStore) -> Vec<Entry> {
    store.list().read().entries().to_vec()
}

/// Whether an entry is marked complete (tracked); missing entries read as false
pub fn store_is_completed(store: &TodoStore, id: EntryId) -> bool {
    store.list().read().get(id).map(|e| e.completed).unwrap_or(false)
}

/// (total, completed) counts (tracked)
pub fn store_counts(store: &TodoStore) -> (usize, usize) {
    let list = store.list().read();
    (list.len(), list.completed_count())
}
