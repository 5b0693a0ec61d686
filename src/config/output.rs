//! Report output configuration

use serde::Deserialize;

/// Report output configuration
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Serialization format for the printed report
    #[serde(default)]
    pub format: ReportFormat,
}

/// Serialization format for reports
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}
