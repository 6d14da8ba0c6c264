//! Docuflow Core Library
//!
//! Domain models, configuration, typed errors, and the validation flow
//! engine. Everything here is free of I/O: persistence and storage live in
//! the `docuflow-db` and `docuflow-storage` crates.

pub mod config;
pub mod error;
pub mod flow;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use flow::{CascadePolicy, FlowEngine, FlowTransition, StepUpdate};
pub use models::ValidationStatus;
