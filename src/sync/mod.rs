//! Entry sources
//!
//! Where entries come from and where new ones are created.
//!
//! ## Configurations
//!
//! - **RemoteSyncAdapter**: the remote waste collection over HTTP; the server
//!   assigns ids, days and timestamps and its item casing is kept as-is
//! - **LocalEntrySource**: entries synthesized in-process, items uppercased
//!
//! Sources never touch the entry store. Callers apply results on success.

mod client;
mod error;
mod local;

pub use client::RemoteSyncAdapter;
pub use error::{SyncError, SyncResult};
pub use local::LocalEntrySource;

use crate::clock::Clock;
use crate::config::{RemoteConfig, SyncMode};
use crate::entry::WasteEntry;
use async_trait::async_trait;
use std::sync::Arc;

/// A place entries are loaded from and created in
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch the full collection
    async fn load_all(&self) -> SyncResult<Vec<WasteEntry>>;

    /// Create one entry from item text. The text is trimmed; empty text is rejected.
    async fn create(&self, item: &str) -> SyncResult<WasteEntry>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Build the source selected by the configuration
pub fn build_source(config: &RemoteConfig, clock: Arc<dyn Clock>) -> SyncResult<Arc<dyn EntrySource>> {
    let source: Arc<dyn EntrySource> = match config.mode {
        SyncMode::Remote => Arc::new(RemoteSyncAdapter::new(config.clone())?),
        SyncMode::Local => Arc::new(LocalEntrySource::new(clock)),
    };
    tracing::info!("Entry source: {}", source.describe());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    #[test]
    fn test_build_source_per_mode() {
        let mut config = RemoteConfig::default();
        let remote = build_source(&config, Arc::new(SystemClock)).unwrap();
        assert!(remote.describe().starts_with("remote"));

        config.mode = SyncMode::Local;
        let local = build_source(&config, Arc::new(SystemClock)).unwrap();
        assert!(local.describe().starts_with("local"));
    }
}
