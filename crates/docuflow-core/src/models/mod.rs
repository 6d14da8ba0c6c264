//! Domain models and request/response DTOs.

pub mod company;
pub mod document;
pub mod entity_reference;
pub mod pending_upload;
pub mod validation;

pub use company::{AddMemberRequest, Company, CompanyMembership, CreateCompanyRequest};
pub use document::{
    CompleteUploadRequest, Document, DocumentResponse, DownloadUrlResponse,
    SubmitDocumentRequest, SubmitDocumentResponse,
};
pub use entity_reference::{CreateEntityReferenceRequest, EntityReference};
pub use pending_upload::PendingDocumentUpload;
pub use validation::{
    StepActionRequest, StepSpec, ValidationFlow, ValidationFlowResponse, ValidationStatus,
    ValidationStep, ValidationStepResponse,
};
