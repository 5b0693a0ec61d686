//! Serializes projection reports for output.

use thiserror::Error;

use crate::config::ReportFormat;
use crate::domain::projection::ProjectionReport;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders a report in the requested format.
pub fn render_report(
    report: &ProjectionReport,
    format: ReportFormat,
) -> Result<String, RenderError> {
    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(rendered)
}
