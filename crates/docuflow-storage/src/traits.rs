//! Storage abstraction trait
//!
//! Backends issue signed URLs and answer existence checks; nothing else.
//! Callers treat failures as terminal for the current request (no retry
//! contract).

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("URL signing failed: {0}")]
    SignFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage collaborator trait
///
/// Implemented by the S3-compatible backend; test code supplies fakes.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Generate a signed PUT URL for a direct upload to `key`.
    ///
    /// The client must upload with the given content type before the URL
    /// expires. `content_type` is advisory: the signature covers method,
    /// key, and expiry only, so a client could PUT a different content
    /// type. The submitted mime type recorded at staging time is the
    /// authoritative one.
    async fn signed_upload_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Generate a signed GET URL for downloading the blob at `key`.
    async fn signed_download_url(&self, key: &str, expires_in: Duration)
        -> StorageResult<String>;

    /// Check whether a blob exists at `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
