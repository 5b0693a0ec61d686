//! Adapters - Connect the domain to the outside world.
//!
//! - `report` - Serialized report output (JSON, YAML)

pub mod report;

pub use report::{render_report, RenderError};
