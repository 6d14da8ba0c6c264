//! Docuflow Database Library
//!
//! sqlx/Postgres repositories for companies, memberships, entity
//! references, documents, validation flows, and pending uploads. Methods
//! that must take part in a larger atomic unit accept a
//! `&mut Transaction<'_, Postgres>` from the caller; everything else runs
//! against the pool directly.

pub mod db;

pub use db::company::{CompanyRepository, MembershipRepository};
pub use db::document::DocumentRepository;
pub use db::entity_reference::EntityReferenceRepository;
pub use db::flow::FlowRepository;
pub use db::pending_upload::{NewPendingUpload, PendingUploadRepository};
