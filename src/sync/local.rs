//! Session-local entry source
//!
//! Builds entries without a server: ids and timestamps come from the clock,
//! items are uppercased. Nothing outlives the session.

use super::error::{SyncError, SyncResult};
use super::EntrySource;
use crate::clock::Clock;
use crate::entry::{EntryId, WasteEntry};
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Entry source that never leaves the process
pub struct LocalEntrySource {
    clock: Arc<dyn Clock>,
    last_stamp: AtomicI64,
}

impl LocalEntrySource {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_stamp: AtomicI64::new(i64::MIN),
        }
    }

    /// Current instant in ms, bumped past the previous stamp if needed
    fn next_stamp(&self, now_ms: i64) -> i64 {
        let mut previous = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let next = now_ms.max(previous.saturating_add(1));
            match self
                .last_stamp
                .compare_exchange(previous, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => previous = actual,
            }
        }
    }
}

#[async_trait]
impl EntrySource for LocalEntrySource {
    async fn load_all(&self) -> SyncResult<Vec<WasteEntry>> {
        Ok(Vec::new())
    }

    async fn create(&self, item: &str) -> SyncResult<WasteEntry> {
        let item = item.trim();
        if item.is_empty() {
            return Err(SyncError::EmptyItem);
        }

        let now = self.clock.now();
        let stamp = self.next_stamp(now.timestamp_millis());

        Ok(WasteEntry {
            id: EntryId::from(stamp),
            item: item.to_uppercase(),
            date: now.date_naive(),
            timestamp: stamp,
        })
    }

    fn describe(&self) -> String {
        "local (session only)".to_string()
    }
}
