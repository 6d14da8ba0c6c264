pub mod company;
pub mod document;
pub mod entity_reference;
pub mod flow;
pub mod pending_upload;
