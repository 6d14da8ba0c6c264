//! Application state shared across handlers.

use docuflow_core::Config;
use docuflow_db::{CompanyRepository, EntityReferenceRepository, MembershipRepository};
use docuflow_services::DocumentService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub documents: DocumentService,
    pub companies: CompanyRepository,
    pub memberships: MembershipRepository,
    pub entity_references: EntityReferenceRepository,
}
