//! Visibility → visitors mapping, anchored to observed traffic.

use serde::{Deserialize, Serialize};

use super::{Baseline, BusinessInputs};
use crate::domain::foundation::{InvalidInput, Percentage, ProjectionError, ValidationError};

/// Intercept of the raw visibility curve (visitors per day at 0% visibility).
pub const DEFAULT_CURVE_INTERCEPT: f64 = -850.0;

/// Slope of the raw visibility curve (visitors per day per visibility point).
pub const DEFAULT_CURVE_SLOPE: f64 = 63.333;

/// raw(current) must exceed this to anchor the curve.
const ANCHOR_EPSILON: f64 = 1e-9;

/// Raw linear curve `raw(v) = intercept + slope * v`.
///
/// Only the shape matters: an [`AnchoredCurve`] rescales it so it passes
/// through the caller's observed traffic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityCurve {
    pub intercept: f64,
    pub slope: f64,
}

impl VisibilityCurve {
    /// Creates a curve from its intercept and slope.
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluates the unscaled curve at `visibility`.
    pub fn raw(&self, visibility: f64) -> f64 {
        self.intercept + self.slope * visibility
    }

    /// Visibility at which the raw curve crosses zero.
    ///
    /// Returns `None` for a flat curve.
    pub fn root(&self) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some(-self.intercept / self.slope)
    }

    /// Checks the curve can be used by the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.intercept.is_finite() {
            return Err(ValidationError::not_finite("curve.intercept"));
        }
        if !self.slope.is_finite() {
            return Err(ValidationError::not_finite("curve.slope"));
        }
        if self.slope <= 0.0 {
            return Err(ValidationError::must_be_positive("curve.slope", self.slope));
        }
        Ok(())
    }

    /// Calibrates the curve against the inputs' observed traffic.
    ///
    /// # Errors
    /// `InvalidInput::DegenerateAnchor` for every current visibility at or
    /// below the curve root (about 13.42% with the default curve), not only
    /// the root itself. At the root the scale is undefined; below it the
    /// scale is negative and would invert the curve.
    pub fn anchor(&self, inputs: &BusinessInputs) -> Result<AnchoredCurve, ProjectionError> {
        let current = inputs.current_visibility().value();
        let raw_current = self.raw(current);
        if raw_current <= ANCHOR_EPSILON {
            return Err(InvalidInput::DegenerateAnchor {
                current_visibility: current,
            }
            .into());
        }

        let baseline = Baseline::derive(inputs);
        Ok(AnchoredCurve {
            curve: *self,
            scale: baseline.visitors_today / raw_current,
            baseline,
        })
    }
}

impl Default for VisibilityCurve {
    fn default() -> Self {
        Self::new(DEFAULT_CURVE_INTERCEPT, DEFAULT_CURVE_SLOPE)
    }
}

/// A [`VisibilityCurve`] scaled to reproduce `visitors_today` at the
/// current visibility. The scale is computed once per input set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredCurve {
    curve: VisibilityCurve,
    scale: f64,
    baseline: Baseline,
}

impl AnchoredCurve {
    /// Visitors per day at the given visibility.
    pub fn visitors_at(&self, visibility: Percentage) -> f64 {
        self.scale * self.curve.raw(visibility.value())
    }

    /// Scale factor `visitors_today / raw(current_visibility)`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Baseline the curve was anchored to.
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }
}
