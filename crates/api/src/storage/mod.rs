//! Object storage for uploaded images.
//!
//! Handlers depend on the [`ObjectStorage`] trait so tests can substitute an
//! in-memory implementation; production wires in [`s3::S3Storage`].

pub mod s3;

use async_trait::async_trait;

/// Failure uploading an object.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("upload failed: {0}")]
    Upload(String),
}

/// Write-only binary object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key`, returning the public URL it is served at.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
