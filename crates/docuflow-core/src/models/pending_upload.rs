use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staged upload awaiting blob confirmation.
///
/// Holds the same fields a Document will get, plus the serialized step
/// specs. The row id doubles as the upload token returned to the client.
/// Promoted to a Document (and deleted) once the blob is confirmed to
/// exist at `bucket_key`; a failed upload leaves no Document behind.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PendingDocumentUpload {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub file_hash: Option<String>,
    pub bucket_name: String,
    pub bucket_key: String,
    pub company_id: Uuid,
    pub entity_reference_id: Uuid,
    pub created_by: Uuid,
    /// JSON-encoded list of `StepSpec`s; empty array means no flow
    pub validation_steps: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
