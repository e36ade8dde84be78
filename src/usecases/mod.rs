//! Use case layer: query submission, reply handling, and shell orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod receive_reply;
pub mod shell;
pub mod submit_query;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
