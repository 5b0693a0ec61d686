//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `projection` - Pure domain services for visibility ROI projection

pub mod foundation;
pub mod projection;
