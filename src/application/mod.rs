//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations for callers such as the
//! command-line binary or an embedding UI.

pub mod handlers;

pub use handlers::{GenerateProjectionHandler, GenerateProjectionQuery, GenerateProjectionResult};
