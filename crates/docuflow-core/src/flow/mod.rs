//! Validation flow engine
//!
//! Pure state-machine logic for the ordered approval steps attached to a
//! document: step-spec validation, target-step selection, approve/reject
//! transitions with cascade, and derivation of the document-level status.
//! The engine performs no I/O; `docuflow-services` loads the flow inside a
//! transaction, runs the engine, and persists the resulting transition.

mod engine;

pub use engine::{validate_step_specs, CascadePolicy, FlowEngine, FlowTransition, StepUpdate};
