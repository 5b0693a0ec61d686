//! GenerateProjectionHandler - Query handler for a full ROI projection.
//!
//! Validates raw business inputs, runs the projection engine over every
//! configured scenario and returns the resulting report.

use tracing::{debug, info, warn};

use crate::domain::foundation::{ProjectionError, ValidationError};
use crate::domain::projection::{
    BusinessInputs, ProjectionEngine, ProjectionReport, ProjectionSettings, RawBusinessInputs,
};

/// Query to project ROI for one set of business inputs.
#[derive(Debug, Clone, Copy)]
pub struct GenerateProjectionQuery {
    /// Order economics as entered, not yet validated.
    pub inputs: RawBusinessInputs,
}

/// Result of a successful projection query.
pub type GenerateProjectionResult = ProjectionReport;

/// Handler for generating projection reports.
///
/// Recomputes from scratch on every call; callers invoke it whenever any
/// input changes.
pub struct GenerateProjectionHandler {
    engine: ProjectionEngine,
}

impl GenerateProjectionHandler {
    pub fn new(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    /// Creates a handler from engine settings, validating them.
    pub fn from_settings(settings: ProjectionSettings) -> Result<Self, ValidationError> {
        Ok(Self::new(ProjectionEngine::new(settings)?))
    }

    pub fn handle(
        &self,
        query: GenerateProjectionQuery,
    ) -> Result<GenerateProjectionResult, ProjectionError> {
        let report = BusinessInputs::try_from(query.inputs)
            .and_then(|inputs| self.engine.project(&inputs))
            .map_err(|err| {
                warn!(code = %err.code(), error = %err, "Rejected projection inputs");
                err
            })?;

        for projection in &report.scenarios {
            debug!(
                calculation_id = %report.calculation_id,
                scenario = %projection.label,
                target_visibility = projection.scenario.target_visibility,
                extra_revenue_per_month = projection.scenario.extra_revenue_per_month,
                payback_days = ?projection.ramp.payback.days(),
                "Projected scenario"
            );
        }

        info!(
            calculation_id = %report.calculation_id,
            scenarios = report.scenarios.len(),
            visitors_today = report.baseline.visitors_today,
            "Generated projection report"
        );

        Ok(report)
    }
}
