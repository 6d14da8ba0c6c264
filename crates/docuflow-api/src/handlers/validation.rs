use crate::auth::AuthUser;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use docuflow_core::models::{DocumentResponse, StepActionRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v0/documents/{id}/approve",
    tag = "validation",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    request_body = StepActionRequest,
    responses(
        (status = 200, description = "Step approved; refreshed document", body = DocumentResponse),
        (status = 400, description = "Document has no flow or no pending step", body = ErrorResponse),
        (status = 403, description = "Requester is not the step approver", body = ErrorResponse),
        (status = 404, description = "Document or step not found", body = ErrorResponse),
        (status = 409, description = "Document already rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn approve_step(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<StepActionRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state
        .documents
        .approve_step(user.user_id, id, request)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/v0/documents/{id}/reject",
    tag = "validation",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    request_body = StepActionRequest,
    responses(
        (status = 200, description = "Step rejected; refreshed document", body = DocumentResponse),
        (status = 400, description = "Document has no flow or no pending step", body = ErrorResponse),
        (status = 403, description = "Requester is not the step approver", body = ErrorResponse),
        (status = 404, description = "Document or step not found", body = ErrorResponse),
        (status = 409, description = "Document already approved or rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn reject_step(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<StepActionRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state
        .documents
        .reject_step(user.user_id, id, request)
        .await?;
    Ok(Json(response))
}
