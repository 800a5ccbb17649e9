//! S3 implementation of [`ObjectStorage`].

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::StorageConfig;

use super::{ObjectStorage, StorageError};

/// Uploads objects to an S3 bucket and returns URLs under the configured
/// public base (bucket website endpoint or CDN origin).
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Build a client from the ambient AWS environment (credentials chain,
    /// region) and the app's storage configuration.
    pub async fn from_env(config: &StorageConfig) -> Self {
        let aws_config = aws_config::load_from_env().await;
        S3Storage {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        Ok(format!("{}/{key}", self.public_base_url))
    }
}
