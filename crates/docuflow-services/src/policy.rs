//! Document submission policy: MIME allowlist and size cap.

use docuflow_core::{AppError, Config};
use std::time::Duration;

/// Policy limits applied before any storage or database work happens.
#[derive(Debug, Clone)]
pub struct DocumentPolicy {
    allowed_mime_types: Vec<String>,
    max_file_size_bytes: i64,
    signed_url_ttl: Duration,
}

impl DocumentPolicy {
    pub fn from_config(config: &Config) -> Self {
        DocumentPolicy {
            allowed_mime_types: config.allowed_mime_types.clone(),
            max_file_size_bytes: config.max_file_size_bytes,
            signed_url_ttl: Duration::from_secs(config.signed_url_ttl_secs),
        }
    }

    pub fn signed_url_ttl(&self) -> Duration {
        self.signed_url_ttl
    }

    /// MIME comparison is exact and case-sensitive; clients send the
    /// canonical lowercase form.
    pub fn check_mime_type(&self, mime_type: &str) -> Result<(), AppError> {
        if !self.allowed_mime_types.iter().any(|m| m == mime_type) {
            return Err(AppError::Validation(format!(
                "mime type '{}' is not allowed; allowed types: {}",
                mime_type,
                self.allowed_mime_types.join(", ")
            )));
        }
        Ok(())
    }

    pub fn check_size(&self, size: i64) -> Result<(), AppError> {
        if size > self.max_file_size_bytes {
            return Err(AppError::Validation(format!(
                "file size {} exceeds the maximum of {} bytes",
                size, self.max_file_size_bytes
            )));
        }
        Ok(())
    }
}
