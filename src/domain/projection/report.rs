//! Projection report: every configured scenario for one input set.

use serde::{Deserialize, Serialize};

use super::{Baseline, BusinessInputs, RampResult, ScenarioResult};
use crate::domain::foundation::{CalculationId, Timestamp};

/// Steady-state and ramp results for one named scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub label: String,
    pub scenario: ScenarioResult,
    pub ramp: RampResult,
}

/// Result of one calculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// Identifies this calculation run.
    pub calculation_id: CalculationId,
    /// When the report was computed.
    pub generated_at: Timestamp,
    pub inputs: BusinessInputs,
    pub baseline: Baseline,
    pub program_cost: f64,
    pub ramp_months: u32,
    /// One entry per configured scenario, in configuration order.
    pub scenarios: Vec<ScenarioProjection>,
}

impl ProjectionReport {
    /// Finds a scenario by label.
    pub fn find(&self, label: &str) -> Option<&ScenarioProjection> {
        self.scenarios.iter().find(|s| s.label == label)
    }

    /// Scenario that recovers the program cost soonest.
    ///
    /// # Edge Cases
    /// - No scenario pays back within the horizon: Returns None
    /// - Ties: Returns the first in configuration order
    pub fn fastest_payback(&self) -> Option<&ScenarioProjection> {
        self.scenarios
            .iter()
            .filter_map(|s| s.ramp.payback.days().map(|days| (s, days)))
            .reduce(|best, next| if next.1 < best.1 { next } else { best })
            .map(|(s, _)| s)
    }

    /// Scenario with the highest steady-state extra revenue.
    pub fn best_steady_state(&self) -> Option<&ScenarioProjection> {
        self.scenarios.iter().reduce(|best, next| {
            if next.scenario.extra_revenue_per_month > best.scenario.extra_revenue_per_month {
                next
            } else {
                best
            }
        })
    }
}
