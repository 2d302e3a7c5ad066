//! UI Components
//!
//! Leptos components making up the widget.

mod entry_list;
mod entry_row;
mod new_entry_form;

pub use entry_list::EntryList;
pub use entry_row::EntryRow;
pub use new_entry_form::NewEntryForm;
