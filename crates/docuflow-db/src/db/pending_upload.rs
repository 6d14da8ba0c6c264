use docuflow_core::models::PendingDocumentUpload;
use docuflow_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const PENDING_COLUMNS: &str = "id, name, mime_type, size, file_hash, bucket_name, bucket_key, \
     company_id, entity_reference_id, created_by, validation_steps, created_at, updated_at";

/// Repository for staged uploads awaiting blob confirmation
#[derive(Clone)]
pub struct PendingUploadRepository {
    pool: PgPool,
}

pub struct NewPendingUpload {
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub file_hash: Option<String>,
    pub bucket_name: String,
    pub bucket_key: String,
    pub company_id: Uuid,
    pub entity_reference_id: Uuid,
    pub created_by: Uuid,
    pub validation_steps: serde_json::Value,
}

impl PendingUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        upload: NewPendingUpload,
    ) -> Result<PendingDocumentUpload, AppError> {
        let staged = sqlx::query_as::<_, PendingDocumentUpload>(&format!(
            r#"
            INSERT INTO pending_document_uploads (
                name, mime_type, size, file_hash, bucket_name, bucket_key,
                company_id, entity_reference_id, created_by, validation_steps
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {PENDING_COLUMNS}
            "#
        ))
        .bind(&upload.name)
        .bind(&upload.mime_type)
        .bind(upload.size)
        .bind(&upload.file_hash)
        .bind(&upload.bucket_name)
        .bind(&upload.bucket_key)
        .bind(upload.company_id)
        .bind(upload.entity_reference_id)
        .bind(upload.created_by)
        .bind(&upload.validation_steps)
        .fetch_one(&self.pool)
        .await?;

        Ok(staged)
    }

    pub async fn get(&self, upload_id: Uuid) -> Result<Option<PendingDocumentUpload>, AppError> {
        let staged = sqlx::query_as::<_, PendingDocumentUpload>(&format!(
            "SELECT {PENDING_COLUMNS} FROM pending_document_uploads WHERE id = $1"
        ))
        .bind(upload_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(staged)
    }

    /// Delete the staging record as part of its promotion transaction.
    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        upload_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM pending_document_uploads WHERE id = $1")
            .bind(upload_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
