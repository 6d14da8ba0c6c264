use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Opaque tag pointing at an entity in an external system. No behavior;
/// documents reference it for bookkeeping only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct EntityReference {
    pub id: Uuid,
    pub entity_type: String,
    pub external_identifier: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateEntityReferenceRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Entity type must be between 1 and 100 characters"
    ))]
    pub entity_type: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "External identifier must be between 1 and 255 characters"
    ))]
    pub external_identifier: String,
}
