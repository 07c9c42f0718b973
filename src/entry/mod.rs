//! Waste entries and the session's entry store

mod store;
mod types;

pub use store::{sort_newest_first, EntryStore};
pub use types::{parse_day, parse_timestamp, EntryId, WasteEntry, DISPLAY_DAY_FORMAT};
