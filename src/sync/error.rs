//! Sync error types

use thiserror::Error;

/// Errors that can occur while loading or creating entries
#[derive(Error, Debug)]
pub enum SyncError {
    /// Item text was empty after trimming
    #[error("Item text is empty")]
    EmptyItem,

    /// Endpoint could not be reached
    #[error("Waste endpoint unavailable")]
    Unavailable,

    /// Request did not complete in time
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not entry-shaped
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// HTTP client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl SyncError {
    /// Classify a transport error the same way for every request
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::Timeout
        } else if err.is_connect() {
            SyncError::Unavailable
        } else {
            SyncError::Request(err)
        }
    }
}

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SyncError::Status {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: down");
        assert_eq!(SyncError::EmptyItem.to_string(), "Item text is empty");
    }
}
