//! Projection Engine - baseline, scenario, ramp and payback over one input set.

use serde::{Deserialize, Serialize};

use super::{
    AnchoredCurve, Baseline, BusinessInputs, ProjectionReport, RampResult, ScenarioProjection,
    ScenarioResult, ScenarioTarget, VisibilityCurve, DEFAULT_PROGRAM_COST, DEFAULT_RAMP_MONTHS,
    MAX_RAMP_MONTHS,
};
use crate::domain::foundation::{
    CalculationId, Percentage, ProjectionError, Timestamp, ValidationError,
};

/// Constants the engine runs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    pub program_cost: f64,
    pub ramp_months: u32,
    pub curve: VisibilityCurve,
    pub scenarios: Vec<ScenarioTarget>,
}

impl ProjectionSettings {
    /// Checks the settings describe a usable model.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.program_cost.is_finite() {
            return Err(ValidationError::not_finite("program_cost"));
        }
        if self.program_cost < 0.0 {
            return Err(ValidationError::out_of_range(
                "program_cost",
                0.0,
                f64::MAX,
                self.program_cost,
            ));
        }
        if !(1..=MAX_RAMP_MONTHS).contains(&self.ramp_months) {
            return Err(ValidationError::out_of_range(
                "ramp_months",
                1.0,
                f64::from(MAX_RAMP_MONTHS),
                f64::from(self.ramp_months),
            ));
        }
        self.curve.validate()?;
        if self.scenarios.is_empty() {
            return Err(ValidationError::empty_field("scenarios"));
        }
        for scenario in &self.scenarios {
            if scenario.label.trim().is_empty() {
                return Err(ValidationError::empty_field("label"));
            }
            Percentage::try_for_field("target_visibility", scenario.target_visibility.value())?;
        }
        Ok(())
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            program_cost: DEFAULT_PROGRAM_COST,
            ramp_months: DEFAULT_RAMP_MONTHS,
            curve: VisibilityCurve::default(),
            scenarios: ScenarioTarget::defaults(),
        }
    }
}

/// Pure projection functions over validated inputs.
///
/// Stateless apart from its settings: callers recompute whenever an input
/// changes.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    settings: ProjectionSettings,
}

impl ProjectionEngine {
    /// Creates an engine, validating the settings.
    pub fn new(settings: ProjectionSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    /// Visitors per day and monthly orders today.
    pub fn derive_baseline(&self, inputs: &BusinessInputs) -> Baseline {
        Baseline::derive(inputs)
    }

    /// Anchors the configured curve to the inputs.
    pub fn anchor(&self, inputs: &BusinessInputs) -> Result<AnchoredCurve, ProjectionError> {
        self.settings.curve.anchor(inputs)
    }

    /// Visitors per day at `visibility`.
    pub fn visitors_at(
        &self,
        visibility: Percentage,
        inputs: &BusinessInputs,
    ) -> Result<f64, ProjectionError> {
        Ok(self.anchor(inputs)?.visitors_at(visibility))
    }

    /// Steady-state economics once `target` visibility is reached.
    pub fn scenario(
        &self,
        target: Percentage,
        inputs: &BusinessInputs,
    ) -> Result<ScenarioResult, ProjectionError> {
        let curve = self.anchor(inputs)?;
        Ok(ScenarioResult::compute(&curve, inputs, target))
    }

    /// Month-by-month ramp toward `target` with payback.
    pub fn ramp(
        &self,
        target: Percentage,
        inputs: &BusinessInputs,
    ) -> Result<RampResult, ProjectionError> {
        let curve = self.anchor(inputs)?;
        Ok(self.simulate(&curve, inputs, target))
    }

    /// Runs every configured scenario against one input set.
    pub fn project(&self, inputs: &BusinessInputs) -> Result<ProjectionReport, ProjectionError> {
        let curve = self.anchor(inputs)?;

        let scenarios = self
            .settings
            .scenarios
            .iter()
            .map(|target| ScenarioProjection {
                label: target.label.clone(),
                scenario: ScenarioResult::compute(&curve, inputs, target.target_visibility),
                ramp: self.simulate(&curve, inputs, target.target_visibility),
            })
            .collect();

        Ok(ProjectionReport {
            calculation_id: CalculationId::new(),
            generated_at: Timestamp::now(),
            inputs: *inputs,
            baseline: *curve.baseline(),
            program_cost: self.settings.program_cost,
            ramp_months: self.settings.ramp_months,
            scenarios,
        })
    }

    fn simulate(
        &self,
        curve: &AnchoredCurve,
        inputs: &BusinessInputs,
        target: Percentage,
    ) -> RampResult {
        RampResult::simulate(
            curve,
            inputs,
            target,
            self.settings.ramp_months,
            self.settings.program_cost,
        )
    }
}
