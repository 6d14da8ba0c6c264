//! Router assembly.

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/api/v0/documents", post(handlers::documents::submit_document))
        .route(
            "/api/v0/documents/complete",
            post(handlers::documents::complete_upload),
        )
        .route(
            "/api/v0/documents/{id}",
            get(handlers::documents::get_document),
        )
        .route(
            "/api/v0/documents/{id}/download",
            get(handlers::documents::download_document),
        )
        .route(
            "/api/v0/documents/{id}/approve",
            post(handlers::validation::approve_step),
        )
        .route(
            "/api/v0/documents/{id}/reject",
            post(handlers::validation::reject_step),
        )
        .route("/api/v0/companies", post(handlers::companies::create_company))
        .route(
            "/api/v0/companies/{id}/members",
            post(handlers::companies::add_member),
        )
        .route(
            "/api/v0/entity-references",
            post(handlers::companies::create_entity_reference),
        )
        .route("/api/v0/openapi.json", get(openapi_spec))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
