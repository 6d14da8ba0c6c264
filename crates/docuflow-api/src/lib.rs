//! Docuflow API
//!
//! HTTP layer: axum handlers over the document service, bearer JWT
//! authentication, OpenAPI documentation, and error rendering.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
