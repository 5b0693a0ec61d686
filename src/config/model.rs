//! Projection model configuration

use serde::Deserialize;
use std::collections::HashSet;

use super::error::ValidationError;
use crate::domain::foundation::Percentage;
use crate::domain::projection::{
    ProjectionSettings, ScenarioTarget, VisibilityCurve, DEFAULT_CURVE_INTERCEPT,
    DEFAULT_CURVE_SLOPE, DEFAULT_PROGRAM_COST, DEFAULT_RAMP_MONTHS, MAX_RAMP_MONTHS,
};

/// Projection model configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Fixed program cost to pay back
    #[serde(default = "default_program_cost")]
    pub program_cost: f64,

    /// Months to ramp from current to target visibility
    #[serde(default = "default_ramp_months")]
    pub ramp_months: u32,

    /// Shape of the visibility → visitors curve
    #[serde(default)]
    pub curve: CurveConfig,

    /// Scenarios to project, in display order
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioConfig>,
}

/// Raw visibility curve parameters
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct CurveConfig {
    #[serde(default = "default_intercept")]
    pub intercept: f64,

    #[serde(default = "default_slope")]
    pub slope: f64,
}

/// A labelled target visibility
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    pub label: String,
    pub target_visibility: f64,
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.program_cost.is_finite() || self.program_cost < 0.0 {
            return Err(ValidationError::InvalidProgramCost);
        }
        if self.ramp_months == 0 || self.ramp_months > MAX_RAMP_MONTHS {
            return Err(ValidationError::InvalidRampMonths);
        }
        if !self.curve.intercept.is_finite()
            || !self.curve.slope.is_finite()
            || self.curve.slope <= 0.0
        {
            return Err(ValidationError::NonPositiveCurveSlope);
        }
        if self.scenarios.is_empty() {
            return Err(ValidationError::NoScenarios);
        }

        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            let label = scenario.label.trim();
            if label.is_empty() {
                return Err(ValidationError::EmptyScenarioLabel);
            }
            if !seen.insert(label) {
                return Err(ValidationError::DuplicateScenarioLabel(label.to_string()));
            }
            if Percentage::try_new(scenario.target_visibility).is_err() {
                return Err(ValidationError::ScenarioTargetOutOfRange(label.to_string()));
            }
        }
        Ok(())
    }

    /// Validates and converts into engine settings.
    pub fn to_settings(&self) -> Result<ProjectionSettings, ValidationError> {
        self.validate()?;
        let scenarios = self
            .scenarios
            .iter()
            .map(|s| {
                let label = s.label.trim();
                ScenarioTarget::new(label, s.target_visibility)
                    .map_err(|_| ValidationError::ScenarioTargetOutOfRange(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProjectionSettings {
            program_cost: self.program_cost,
            ramp_months: self.ramp_months,
            curve: VisibilityCurve::new(self.curve.intercept, self.curve.slope),
            scenarios,
        })
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            program_cost: default_program_cost(),
            ramp_months: default_ramp_months(),
            curve: CurveConfig::default(),
            scenarios: default_scenarios(),
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            slope: default_slope(),
        }
    }
}

fn default_program_cost() -> f64 {
    DEFAULT_PROGRAM_COST
}

fn default_ramp_months() -> u32 {
    DEFAULT_RAMP_MONTHS
}

fn default_intercept() -> f64 {
    DEFAULT_CURVE_INTERCEPT
}

fn default_slope() -> f64 {
    DEFAULT_CURVE_SLOPE
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    ScenarioTarget::defaults()
        .into_iter()
        .map(ScenarioConfig::from)
        .collect()
}

impl From<ScenarioTarget> for ScenarioConfig {
    fn from(target: ScenarioTarget) -> Self {
        Self {
            label: target.label,
            target_visibility: target.target_visibility.value(),
        }
    }
}
