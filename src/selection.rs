// src/selection.rs
//! Selection bookkeeping for one collected list.
//!
//! Entries are never removed here; the only way to drop an entry is a full
//! rescan that replaces the store.

use crate::types::{Entry, PublishedFileId, ValidationError};
use std::collections::HashSet;
use std::fmt;

/// Ordered entries plus their selection flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    entries: Vec<Entry>,
}

/// Selected and total entry counts, displayed as the `3/5 mods` badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCount {
    pub selected: usize,
    pub total: usize,
}

impl fmt::Display for SelectionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} mods", self.selected, self.total)
    }
}

impl SelectionStore {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), ValidationError> {
        let entry = self.entry_mut(index)?;
        entry.selected = selected;
        Ok(())
    }

    /// Flips one entry and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ValidationError> {
        let entry = self.entry_mut(index)?;
        entry.selected = !entry.selected;
        Ok(entry.selected)
    }

    pub fn select_all(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.selected = selected;
        }
    }

    /// Sets the flag on every entry whose ID is in `ids`.
    ///
    /// Returns the IDs that matched nothing; they are not inserted.
    pub fn set_selected_by_id<'a, I>(&mut self, ids: I, selected: bool) -> Vec<PublishedFileId>
    where
        I: IntoIterator<Item = &'a PublishedFileId>,
    {
        let wanted: HashSet<&PublishedFileId> = ids.into_iter().collect();
        let mut matched = HashSet::with_capacity(wanted.len());

        for entry in &mut self.entries {
            if wanted.contains(&entry.id) {
                entry.selected = selected;
                matched.insert(entry.id.clone());
            }
        }

        let mut unknown: Vec<PublishedFileId> = wanted
            .into_iter()
            .filter(|id| !matched.contains(*id))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }

    /// Selected entries in collection order.
    pub fn selected(&self) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.selected).collect()
    }

    pub fn count(&self) -> SelectionCount {
        SelectionCount {
            selected: self.entries.iter().filter(|e| e.selected).count(),
            total: self.entries.len(),
        }
    }

    /// Entries visible under a text filter, with their store indexes.
    ///
    /// Matching is case-insensitive against the title or the `(id)` label.
    /// The query is not trimmed: a lone space matches titles containing one.
    /// Filtering never touches selection: hidden entries stay selected (or not)
    /// and are still exported.
    pub fn filter(&self, query: &str) -> Vec<(usize, &Entry)> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches_filter(&query))
            .collect()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry, ValidationError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })
    }
}

impl From<Vec<Entry>> for SelectionStore {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}
