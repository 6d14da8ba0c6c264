//! Docuflow Services Library
//!
//! Business-logic layer between the HTTP handlers and the repositories.
//! The `DocumentService` owns the document lifecycle end to end; the flow
//! engine itself is pure and lives in the core crate.

pub mod clock;
pub mod collaborators;
pub mod document_service;
pub mod policy;

pub use clock::{Clock, SystemClock};
pub use collaborators::{
    DocumentLookup, EntityReferenceLookup, MembershipLookup, StagingLookup,
};
pub use document_service::DocumentService;
pub use policy::DocumentPolicy;
