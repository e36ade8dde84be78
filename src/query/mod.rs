//! Query integration layer: wire types and the HTTP client for `/query`.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod gateway;
pub mod wire;

pub use gateway::QueryGateway;

/// Returns the query module name for smoke checks.
pub fn module_name() -> &'static str {
    "query"
}
