//! Read-side collaborator seams for the document service.
//!
//! Authorization gates and the lookups that run before any transaction go
//! through these traits; the repository-backed impls below are the
//! production wiring, test code supplies fakes. Transactional writes stay
//! on the concrete repositories.

use async_trait::async_trait;
use docuflow_core::models::{Document, EntityReference, PendingDocumentUpload};
use docuflow_core::AppError;
use docuflow_db::{
    DocumentRepository, EntityReferenceRepository, MembershipRepository, PendingUploadRepository,
};
use uuid::Uuid;

/// Answers "is user U a member of company C?".
#[async_trait]
pub trait MembershipLookup: Send + Sync {
    async fn is_member(&self, company_id: Uuid, user_id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
impl MembershipLookup for MembershipRepository {
    async fn is_member(&self, company_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        MembershipRepository::is_member(self, company_id, user_id).await
    }
}

#[async_trait]
pub trait EntityReferenceLookup: Send + Sync {
    async fn get(&self, reference_id: Uuid) -> Result<Option<EntityReference>, AppError>;
}

#[async_trait]
impl EntityReferenceLookup for EntityReferenceRepository {
    async fn get(&self, reference_id: Uuid) -> Result<Option<EntityReference>, AppError> {
        EntityReferenceRepository::get(self, reference_id).await
    }
}

#[async_trait]
pub trait DocumentLookup: Send + Sync {
    async fn get(&self, document_id: Uuid) -> Result<Option<Document>, AppError>;
}

#[async_trait]
impl DocumentLookup for DocumentRepository {
    async fn get(&self, document_id: Uuid) -> Result<Option<Document>, AppError> {
        DocumentRepository::get(self, document_id).await
    }
}

/// Staged-upload reads; promotion and deletion stay on the repository.
#[async_trait]
pub trait StagingLookup: Send + Sync {
    async fn get(&self, upload_id: Uuid) -> Result<Option<PendingDocumentUpload>, AppError>;
}

#[async_trait]
impl StagingLookup for PendingUploadRepository {
    async fn get(&self, upload_id: Uuid) -> Result<Option<PendingDocumentUpload>, AppError> {
        PendingUploadRepository::get(self, upload_id).await
    }
}
