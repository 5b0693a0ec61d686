//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod projection;

pub use projection::{
    GenerateProjectionHandler, GenerateProjectionQuery, GenerateProjectionResult,
};
