//! In-memory entry store
//!
//! Holds the session's entries. Collection order carries no meaning; every
//! view sorts by timestamp when it is built.

use super::types::{EntryId, WasteEntry};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Ordered, id-unique collection of waste entries
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<WasteEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the collection. Repeated ids keep their first occurrence.
    pub fn replace_all(&mut self, entries: Vec<WasteEntry>) {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());

        for entry in entries {
            if seen.insert(entry.id.clone()) {
                kept.push(entry);
            } else {
                tracing::warn!(id = %entry.id, "Dropping duplicate entry id");
            }
        }

        self.entries = kept;
    }

    /// Add one entry. Returns false (and changes nothing) if the id is taken.
    pub fn append(&mut self, entry: WasteEntry) -> bool {
        if self.contains(&entry.id) {
            tracing::debug!(id = %entry.id, "Entry id already present, not appending");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry with this id, if any
    pub fn remove_by_id(&mut self, id: &EntryId) -> Option<WasteEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn get(&self, id: &EntryId) -> Option<&WasteEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WasteEntry> {
        self.entries.iter()
    }

    /// Entries bucketed on the given day, in collection order
    pub fn on_day(&self, day: NaiveDate) -> Vec<&WasteEntry> {
        self.entries.iter().filter(|e| e.date == day).collect()
    }

    /// All entries, newest first. Equal timestamps keep collection order.
    pub fn newest_first(&self) -> Vec<&WasteEntry> {
        let mut sorted: Vec<&WasteEntry> = self.entries.iter().collect();
        sort_newest_first(&mut sorted);
        sorted
    }
}

/// Stable descending sort on timestamp
pub fn sort_newest_first(entries: &mut [&WasteEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
