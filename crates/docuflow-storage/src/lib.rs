//! Docuflow Storage Library
//!
//! Storage collaborator abstraction: time-limited signed URLs for direct
//! upload/download and blob-existence checks. The core never moves blob
//! bytes itself; clients upload and download straight against the bucket.
//!
//! # Storage key format
//!
//! Keys are company-scoped: `documents/{company_id}/{token}.{ext}`. Key
//! generation is centralized in the `keys` module.

pub mod factory;
pub mod keys;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::document_key;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
