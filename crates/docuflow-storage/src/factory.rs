//! Storage factory: builds the configured backend.

use crate::s3::S3Storage;
use crate::traits::{Storage, StorageResult};
use docuflow_core::Config;
use std::sync::Arc;

/// Create the storage collaborator from configuration.
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.bucket_name.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )?;

    tracing::info!(
        bucket = %config.bucket_name,
        region = %config.s3_region,
        endpoint = ?config.s3_endpoint,
        "Initialized S3 storage backend"
    );

    Ok(Arc::new(storage))
}
