//! Scenario targets and steady-state projections.

use serde::{Deserialize, Serialize};

use super::{AnchoredCurve, BusinessInputs, DAYS_PER_MONTH};
use crate::domain::foundation::{Percentage, ValidationError};

/// Target visibility of the Conservative scenario.
pub const CONSERVATIVE_TARGET: f64 = 50.0;

/// Target visibility of the Baseline scenario.
pub const BASELINE_TARGET: f64 = 65.0;

/// Target visibility of the Aggressive scenario.
pub const AGGRESSIVE_TARGET: f64 = 75.0;

/// Unvalidated scenario target as read from settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScenarioTarget {
    pub label: String,
    pub target_visibility: f64,
}

/// A named visibility target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScenarioTarget", into = "RawScenarioTarget")]
pub struct ScenarioTarget {
    pub label: String,
    pub target_visibility: Percentage,
}

impl ScenarioTarget {
    /// Creates a scenario target, validating label and visibility.
    pub fn new(label: impl Into<String>, target_visibility: f64) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            label,
            target_visibility: Percentage::try_for_field("target_visibility", target_visibility)?,
        })
    }

    /// The Conservative / Baseline / Aggressive scenario set.
    pub fn defaults() -> Vec<Self> {
        [
            ("Conservative", CONSERVATIVE_TARGET),
            ("Baseline", BASELINE_TARGET),
            ("Aggressive", AGGRESSIVE_TARGET),
        ]
        .into_iter()
        .map(|(label, target)| Self {
            label: label.to_string(),
            target_visibility: Percentage::new(target),
        })
        .collect()
    }
}

impl TryFrom<RawScenarioTarget> for ScenarioTarget {
    type Error = ValidationError;

    fn try_from(raw: RawScenarioTarget) -> Result<Self, Self::Error> {
        Self::new(raw.label, raw.target_visibility)
    }
}

impl From<ScenarioTarget> for RawScenarioTarget {
    fn from(target: ScenarioTarget) -> Self {
        Self {
            label: target.label,
            target_visibility: target.target_visibility.value(),
        }
    }
}

/// Steady-state economics once a target visibility is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub target_visibility: f64,
    pub visitors_per_day: f64,
    pub extra_visitors_per_month: f64,
    pub orders_per_month: f64,
    pub extra_orders_per_month: f64,
    pub extra_revenue_per_month: f64,
}

impl ScenarioResult {
    /// Projects monthly economics at `visibility`.
    ///
    /// # Algorithm
    /// 1. visitors_per_day = anchored curve at visibility
    /// 2. extra_visitors = (visitors_per_day - visitors_today) × 30
    /// 3. orders_per_month = visitors_per_day × 30 × conversion
    /// 4. extra_orders = orders_per_month - orders_today
    /// 5. extra_revenue = extra_orders × aov
    pub fn compute(curve: &AnchoredCurve, inputs: &BusinessInputs, visibility: Percentage) -> Self {
        let baseline = curve.baseline();
        let visitors_per_day = curve.visitors_at(visibility);
        let orders_per_month =
            visitors_per_day * DAYS_PER_MONTH * inputs.conversion_rate().as_fraction();
        let extra_orders_per_month = orders_per_month - baseline.orders_today;

        Self {
            target_visibility: visibility.value(),
            visitors_per_day,
            extra_visitors_per_month: (visitors_per_day - baseline.visitors_today)
                * DAYS_PER_MONTH,
            orders_per_month,
            extra_orders_per_month,
            extra_revenue_per_month: extra_orders_per_month * inputs.aov(),
        }
    }
}
