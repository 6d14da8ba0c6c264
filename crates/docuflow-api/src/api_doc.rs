//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use docuflow_core::models;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docuflow API",
        version = "0.1.0",
        description = "Document management API (v0) with ordered validation flows. Documents are uploaded directly to object storage via signed URLs; each document may carry an ordered approval flow whose steps are approved or rejected by their designated approvers."
    ),
    paths(
        handlers::documents::submit_document,
        handlers::documents::complete_upload,
        handlers::documents::get_document,
        handlers::documents::download_document,
        handlers::validation::approve_step,
        handlers::validation::reject_step,
        handlers::companies::create_company,
        handlers::companies::add_member,
        handlers::companies::create_entity_reference,
    ),
    components(
        schemas(
            models::SubmitDocumentRequest,
            models::SubmitDocumentResponse,
            models::CompleteUploadRequest,
            models::DocumentResponse,
            models::DownloadUrlResponse,
            models::StepActionRequest,
            models::StepSpec,
            models::ValidationStatus,
            models::ValidationFlowResponse,
            models::ValidationStepResponse,
            models::Company,
            models::CompanyMembership,
            models::CreateCompanyRequest,
            models::AddMemberRequest,
            models::EntityReference,
            models::CreateEntityReferenceRequest,
            error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "documents", description = "Document submission, retrieval, and download"),
        (name = "validation", description = "Validation flow transitions"),
        (name = "companies", description = "Companies, memberships, and entity references")
    )
)]
pub struct ApiDoc;
