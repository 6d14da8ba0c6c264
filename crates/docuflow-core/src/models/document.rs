use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::validation::{StepSpec, ValidationFlowResponse, ValidationStatus, ValidationStep};
use super::ValidationFlow;

/// Document record. The blob itself lives in object storage under
/// `(bucket_name, bucket_key)`; this row only carries its metadata and the
/// derived validation status.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub file_hash: Option<String>,
    pub bucket_name: String,
    pub bucket_key: String,
    pub company_id: Uuid,
    pub entity_reference_id: Uuid,
    pub created_by: Option<Uuid>,
    /// `None` means no validation flow is attached
    pub validation_status: Option<ValidationStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to submit a new document for upload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitDocumentRequest {
    /// Original filename
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
    /// Content type (MIME type); must be in the configured allowlist
    #[validate(length(
        min = 1,
        max = 100,
        message = "MIME type must be between 1 and 100 characters"
    ))]
    pub mime_type: String,
    /// File size in bytes
    #[validate(range(min = 1, message = "File size must be at least 1 byte"))]
    pub size: i64,
    /// Optional content hash supplied by the client
    #[serde(default)]
    pub file_hash: Option<String>,
    /// Owning company; requester must be a member
    pub company_id: Uuid,
    /// External entity this document is attached to
    pub entity_reference_id: Uuid,
    /// Ordered approval steps; empty means no validation flow
    #[serde(default)]
    pub validation_steps: Vec<StepSpec>,
}

/// Response containing the staged upload token and signed upload URL
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitDocumentResponse {
    /// Token used to complete the upload (id of the staging record)
    pub upload_token: Uuid,
    /// Storage key the blob must be uploaded to
    pub bucket_key: String,
    /// Signed PUT URL for direct upload
    pub upload_url: String,
    /// URL expiration time
    pub expires_at: DateTime<Utc>,
}

/// Request to promote a staged upload into a document
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteUploadRequest {
    /// Token from the submit response
    pub upload_token: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DownloadUrlResponse {
    /// Signed GET URL, valid for the configured lifetime
    pub download_url: String,
}

/// Document snapshot returned by the API, including the flow when present.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub file_hash: Option<String>,
    pub bucket_name: String,
    pub bucket_key: String,
    pub company_id: Uuid,
    pub entity_reference_id: Uuid,
    pub created_by: Option<Uuid>,
    pub validation_status: Option<ValidationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_flow: Option<ValidationFlowResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentResponse {
    pub fn from_parts(
        document: Document,
        flow: Option<(ValidationFlow, Vec<ValidationStep>)>,
    ) -> Self {
        DocumentResponse {
            id: document.id,
            name: document.name,
            mime_type: document.mime_type,
            size: document.size,
            file_hash: document.file_hash,
            bucket_name: document.bucket_name,
            bucket_key: document.bucket_key,
            company_id: document.company_id,
            entity_reference_id: document.entity_reference_id,
            created_by: document.created_by,
            validation_status: document.validation_status,
            validation_flow: flow
                .map(|(flow, steps)| ValidationFlowResponse::from_parts(flow, steps)),
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}
