//! Widget Configuration
//!
//! Read once at startup; every field falls back to its default.

use serde::Deserialize;

use crate::error::TodoError;

/// What to do with input that is empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Refuse the submission, list unchanged
    #[default]
    Reject,
    /// Append a row with empty text
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Heading shown above the input
    pub title: String,
    /// Placeholder of the text field
    pub placeholder: String,
    pub empty_input: EmptyInputPolicy,
    /// Wire the delete glyph to removal; when false it is rendered inert
    pub delete_enabled: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "To-Do List".to_string(),
            placeholder: "Add new item...".to_string(),
            empty_input: EmptyInputPolicy::default(),
            delete_enabled: true,
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> Result<Self, TodoError> {
        serde_json::from_str(json).map_err(|e| TodoError::InvalidConfig(e.to_string()))
    }
}
