//! View models derived from the entry store

use crate::entry::{EntryId, EntryStore, WasteEntry};
use chrono::NaiveDate;

/// One displayed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    /// 1-based rank among all entries, newest first; the same in every view
    pub position: usize,
    pub id: EntryId,
    pub item: String,
    pub date: NaiveDate,
}

impl EntryRow {
    fn from_entry(position: usize, entry: &WasteEntry) -> Self {
        Self {
            position,
            id: entry.id.clone(),
            item: entry.item.clone(),
            date: entry.date,
        }
    }

    /// Day label as shown to users
    pub fn date_label(&self) -> String {
        self.date.format(crate::entry::DISPLAY_DAY_FORMAT).to_string()
    }
}

/// Entries of a single day, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayView {
    pub date: NaiveDate,
    pub rows: Vec<EntryRow>,
}

impl TodayView {
    pub fn build(store: &EntryStore, today: NaiveDate) -> Self {
        let rows = store
            .newest_first()
            .into_iter()
            .enumerate()
            .filter(|(_, entry)| entry.date == today)
            .map(|(i, entry)| EntryRow::from_entry(i + 1, entry))
            .collect();

        Self { date: today, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every entry, newest first, with the total count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub total: usize,
    pub rows: Vec<EntryRow>,
}

impl OverviewView {
    pub fn build(store: &EntryStore) -> Self {
        Self {
            total: store.len(),
            rows: store
                .newest_first()
                .into_iter()
                .enumerate()
                .map(|(i, entry)| EntryRow::from_entry(i + 1, entry))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
