//! Projection query handlers.

mod generate_projection;

pub use generate_projection::{
    GenerateProjectionHandler, GenerateProjectionQuery, GenerateProjectionResult,
};
