//! Remote waste endpoint client
//!
//! HTTP client for the waste collection endpoint:
//! - `GET  {base}/api/waste` returns every entry
//! - `POST {base}/api/waste` with `{"item": ...}` returns the created entry

use super::error::{SyncError, SyncResult};
use super::EntrySource;
use crate::config::RemoteConfig;
use crate::entry::WasteEntry;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// REST client for the waste collection
pub struct RemoteSyncAdapter {
    client: Client,
    config: RemoteConfig,
}

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    item: &'a str,
}

impl RemoteSyncAdapter {
    /// Create a new client with the given configuration
    pub fn new(config: RemoteConfig) -> SyncResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| SyncError::Setup(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Read the body of a successful response, or turn the status into an error
    async fn into_body<T: serde::de::DeserializeOwned>(response: Response) -> SyncResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(SyncError::from_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| SyncError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EntrySource for RemoteSyncAdapter {
    async fn load_all(&self) -> SyncResult<Vec<WasteEntry>> {
        let url = self.config.collection_url();
        tracing::debug!(%url, "Loading waste entries");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SyncError::from_transport)?;

        let entries: Vec<WasteEntry> = Self::into_body(response).await?;
        tracing::info!("Loaded {} waste entries", entries.len());
        Ok(entries)
    }

    async fn create(&self, item: &str) -> SyncResult<WasteEntry> {
        let item = item.trim();
        if item.is_empty() {
            return Err(SyncError::EmptyItem);
        }

        let url = self.config.collection_url();
        tracing::debug!(%url, item, "Creating waste entry");

        let response = self
            .client
            .post(&url)
            .json(&CreateRequest { item })
            .send()
            .await
            .map_err(SyncError::from_transport)?;

        let entry: WasteEntry = Self::into_body(response).await?;
        tracing::info!(id = %entry.id, "Created waste entry");
        Ok(entry)
    }

    fn describe(&self) -> String {
        format!("remote ({})", self.config.collection_url())
    }
}
