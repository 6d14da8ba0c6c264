use docuflow_core::models::{Document, PendingDocumentUpload, ValidationStatus};
use docuflow_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const DOCUMENT_COLUMNS: &str = "id, name, mime_type, size, file_hash, bucket_name, bucket_key, \
     company_id, entity_reference_id, created_by, validation_status, created_at, updated_at";

/// Repository for document records
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, document_id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1"
        ))
        .bind(document_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    /// Locking read used by approve/reject so concurrent transitions on the
    /// same document serialize instead of acting on a stale snapshot.
    pub async fn get_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        document_id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1 FOR UPDATE"
        ))
        .bind(document_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(document)
    }

    /// Promote a staging record into a document row. Runs inside the
    /// caller's transaction together with flow creation and staging-record
    /// deletion.
    pub async fn create_from_staging(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staging: &PendingDocumentUpload,
        validation_status: Option<ValidationStatus>,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(&format!(
            r#"
            INSERT INTO documents (
                name, mime_type, size, file_hash, bucket_name, bucket_key,
                company_id, entity_reference_id, created_by, validation_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {DOCUMENT_COLUMNS}
            "#
        ))
        .bind(&staging.name)
        .bind(&staging.mime_type)
        .bind(staging.size)
        .bind(&staging.file_hash)
        .bind(&staging.bucket_name)
        .bind(&staging.bucket_key)
        .bind(staging.company_id)
        .bind(staging.entity_reference_id)
        .bind(staging.created_by)
        .bind(validation_status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(document)
    }

    pub async fn set_validation_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        document_id: Uuid,
        status: ValidationStatus,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE documents
            SET validation_status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(document_id)
        .bind(status)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
