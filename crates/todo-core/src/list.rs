//! To-Do List
//!
//! Ordered collection of entries. Insertion order is display order.

use log::debug;

use crate::config::EmptyInputPolicy;
use crate::entry::{Entry, EntryId};
use crate::error::TodoError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    entries: Vec<Entry>,
    /// Next id to hand out; never decremented
    next_id: u32,
    policy: EmptyInputPolicy,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EmptyInputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> EmptyInputPolicy {
        self.policy
    }

    /// Trim `raw` and append it as a new entry at the bottom of the list.
    pub fn add(&mut self, raw: &str) -> Result<EntryId, TodoError> {
        let text = raw.trim();
        if text.is_empty() && self.policy == EmptyInputPolicy::Reject {
            return Err(TodoError::EmptyText);
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry::new(id, text));
        debug!("added entry {} ({} total)", id, self.entries.len());
        Ok(id)
    }

    /// Flip the completion flag and return the new state.
    pub fn toggle(&mut self, id: EntryId) -> Result<bool, TodoError> {
        let entry = self.get_mut(id)?;
        entry.completed = !entry.completed;
        debug!("entry {} completed={}", id, entry.completed);
        Ok(entry.completed)
    }

    /// Set the completion flag to the checkbox's final state.
    pub fn set_completed(&mut self, id: EntryId, completed: bool) -> Result<(), TodoError> {
        let entry = self.get_mut(id)?;
        entry.completed = completed;
        debug!("entry {} completed={}", id, completed);
        Ok(())
    }

    pub fn remove(&mut self, id: EntryId) -> Result<Entry, TodoError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(TodoError::UnknownEntry(id))?;
        let removed = self.entries.remove(index);
        debug!("removed entry {} ({} left)", id, self.entries.len());
        Ok(removed)
    }

    /// Remove every completed entry, returning how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.completed);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("cleared {} completed entries", removed);
        }
        removed
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Result<&mut Entry, TodoError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TodoError::UnknownEntry(id))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}
