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
    CompleteUploadRequest, DocumentResponse, DownloadUrlResponse, SubmitDocumentRequest,
    SubmitDocumentResponse,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v0/documents",
    tag = "documents",
    request_body = SubmitDocumentRequest,
    responses(
        (status = 201, description = "Upload staged", body = SubmitDocumentResponse),
        (status = 400, description = "Invalid metadata or step specs", body = ErrorResponse),
        (status = 403, description = "Requester is not a company member", body = ErrorResponse),
        (status = 404, description = "Entity reference not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn submit_document(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<SubmitDocumentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state
        .documents
        .submit_document(user.user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v0/documents/complete",
    tag = "documents",
    request_body = CompleteUploadRequest,
    responses(
        (status = 201, description = "Document created", body = DocumentResponse),
        (status = 400, description = "Blob missing at the upload location", body = ErrorResponse),
        (status = 403, description = "Requester did not stage this upload", body = ErrorResponse),
        (status = 404, description = "Pending upload not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, request), fields(user_id = %user.user_id))]
pub async fn complete_upload(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<CompleteUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state
        .documents
        .complete_upload(user.user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v0/documents/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document found", body = DocumentResponse),
        (status = 403, description = "Requester is not a company member", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state.documents.document(user.user_id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v0/documents/{id}/download",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Signed download URL", body = DownloadUrlResponse),
        (status = 403, description = "Requester is not a company member", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = state.documents.download_url(user.user_id, id).await?;
    Ok(Json(response))
}
