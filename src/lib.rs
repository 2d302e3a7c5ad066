//! To-Do List Frontend
//!
//! Leptos widget: a text field, an "Add" button and a growing list of
//! entries that can be checked off or removed.

pub mod app;
pub mod components;
pub mod context;
pub mod store;

pub use app::App;
