//! Error types for list operations and configuration.

use thiserror::Error;

use crate::entry::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Submitted text was empty after trimming
    #[error("entry text is empty")]
    EmptyText,

    #[error("no entry with id {0}")]
    UnknownEntry(EntryId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
