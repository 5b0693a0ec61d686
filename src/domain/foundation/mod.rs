//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the projection domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{ErrorCode, InvalidInput, ProjectionError, ValidationError};
pub use ids::CalculationId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
