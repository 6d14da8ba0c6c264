use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use docuflow_core::models::{
    AddMemberRequest, Company, CompanyMembership, CreateCompanyRequest,
    CreateEntityReferenceRequest, EntityReference,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v0/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCompanyRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(docuflow_core::AppError::from)?;
    let company = state.companies.create(&request.name).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    post,
    path = "/api/v0/companies/{id}/members",
    tag = "companies",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added (idempotent)", body = CompanyMembership),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AddMemberRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if state.companies.get(id).await?.is_none() {
        return Err(docuflow_core::AppError::NotFound("company not found".to_string()).into());
    }
    let membership = state.memberships.add(id, request.user_id).await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

#[utoipa::path(
    post,
    path = "/api/v0/entity-references",
    tag = "companies",
    request_body = CreateEntityReferenceRequest,
    responses(
        (status = 201, description = "Entity reference created", body = EntityReference),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn create_entity_reference(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEntityReferenceRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(docuflow_core::AppError::from)?;
    let reference = state
        .entity_references
        .create(&request.entity_type, &request.external_identifier)
        .await?;
    Ok((StatusCode::CREATED, Json(reference)))
}
