//! To-Do Core
//!
//! Entry model, ordered list operations and widget configuration.
//! Has no browser dependencies so it can be tested natively.

mod config;
mod entry;
mod error;
mod list;

pub use config::{EmptyInputPolicy, TodoConfig};
pub use entry::{Entry, EntryId};
pub use error::TodoError;
pub use list::TodoList;
