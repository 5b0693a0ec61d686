//! Projection Module - Pure domain services for visibility ROI estimation.
//!
//! Given a business's order economics and its current visibility score, this
//! module projects extra visitors, orders and revenue at target visibility
//! levels, simulates a linear ramp toward each target and computes when the
//! program cost is paid back.
//!
//! # Components
//!
//! - `BusinessInputs` / `Baseline` - Validated inputs and today's traffic
//! - `VisibilityCurve` / `AnchoredCurve` - Visibility → visitors mapping
//! - `ScenarioResult` - Steady-state economics at a target visibility
//! - `RampResult` - Month-by-month ramp with payback
//! - `PaybackCalculator` - Days to recover the program cost
//! - `ProjectionEngine` - Runs all of the above for a scenario list
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Callers recompute on every input
//! change; nothing is cached between calculations.

mod engine;
mod inputs;
mod payback;
mod ramp;
mod report;
mod scenario;
mod visibility_curve;

/// Month length used throughout the model.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub use engine::{ProjectionEngine, ProjectionSettings};
pub use inputs::{Baseline, BusinessInputs, RawBusinessInputs};
pub use payback::{Payback, PaybackCalculator, DEFAULT_PROGRAM_COST};
pub use ramp::{ramp_visibility, MonthData, RampResult, DEFAULT_RAMP_MONTHS, MAX_RAMP_MONTHS};
pub use report::{ProjectionReport, ScenarioProjection};
pub use scenario::{
    RawScenarioTarget, ScenarioResult, ScenarioTarget, AGGRESSIVE_TARGET, BASELINE_TARGET, CONSERVATIVE_TARGET,
};
pub use visibility_curve::{
    AnchoredCurve, VisibilityCurve, DEFAULT_CURVE_INTERCEPT, DEFAULT_CURVE_SLOPE,
};
