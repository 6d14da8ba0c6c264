use docuflow_core::models::EntityReference;
use docuflow_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for external entity references
#[derive(Clone)]
pub struct EntityReferenceRepository {
    pool: PgPool,
}

impl EntityReferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        entity_type: &str,
        external_identifier: &str,
    ) -> Result<EntityReference, AppError> {
        let reference = sqlx::query_as::<_, EntityReference>(
            r#"
            INSERT INTO entity_references (entity_type, external_identifier)
            VALUES ($1, $2)
            RETURNING id, entity_type, external_identifier, created_at, updated_at
            "#,
        )
        .bind(entity_type)
        .bind(external_identifier)
        .fetch_one(&self.pool)
        .await?;

        Ok(reference)
    }

    pub async fn get(&self, reference_id: Uuid) -> Result<Option<EntityReference>, AppError> {
        let reference = sqlx::query_as::<_, EntityReference>(
            r#"
            SELECT id, entity_type, external_identifier, created_at, updated_at
            FROM entity_references
            WHERE id = $1
            "#,
        )
        .bind(reference_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reference)
    }
}
