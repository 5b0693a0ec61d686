//! Report Adapters - Output encodings for projection reports.

mod renderer;

pub use renderer::{render_report, RenderError};
