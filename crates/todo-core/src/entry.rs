//! Entry Entity
//!
//! A single to-do item as rendered in the list.

use std::fmt;

/// Process-local entry identifier.
///
/// Allocated from a counter that only moves forward, so an id is never
/// handed out twice within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl EntryId {
    /// DOM id of the entry's checkbox within the widget owning `prefix`
    pub fn dom_id(self, prefix: &str) -> String {
        format!("{}-entry-{}", prefix, self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    /// Trimmed text as typed by the user
    pub text: String,
    /// Completion flag (drives the strikethrough marker)
    pub completed: bool,
}

impl Entry {
    pub fn new(id: EntryId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
