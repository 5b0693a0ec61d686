//! Month-by-month ramp from current to target visibility.

use serde::{Deserialize, Serialize};

use super::{AnchoredCurve, BusinessInputs, Payback, PaybackCalculator, ScenarioResult};
use crate::domain::foundation::Percentage;

/// Default number of months to reach the target visibility.
pub const DEFAULT_RAMP_MONTHS: u32 = 3;

/// Longest ramp the engine will simulate.
pub const MAX_RAMP_MONTHS: u32 = 60;

/// Economics for one month of the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    /// 1-based month index.
    pub month: u32,
    pub visibility: f64,
    pub visitors_per_day: f64,
    pub extra_visitors_per_month: f64,
    pub orders_per_month: f64,
    pub extra_orders: f64,
    pub extra_revenue: f64,
}

impl MonthData {
    fn from_projection(month: u32, projection: ScenarioResult) -> Self {
        Self {
            month,
            visibility: projection.target_visibility,
            visitors_per_day: projection.visitors_per_day,
            extra_visitors_per_month: projection.extra_visitors_per_month,
            orders_per_month: projection.orders_per_month,
            extra_orders: projection.extra_orders_per_month,
            extra_revenue: projection.extra_revenue_per_month,
        }
    }
}

/// Outcome of simulating the ramp toward one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampResult {
    pub months: Vec<MonthData>,
    pub total_extra_revenue: f64,
    pub payback: Payback,
}

impl RampResult {
    /// Simulates a linear ramp of `ramp_months` months toward `target`.
    ///
    /// Month 0 is implicitly the current visibility; the last month is
    /// pinned to `target` exactly so it matches the steady-state scenario.
    pub fn simulate(
        curve: &AnchoredCurve,
        inputs: &BusinessInputs,
        target: Percentage,
        ramp_months: u32,
        program_cost: f64,
    ) -> Self {
        let current = inputs.current_visibility();

        let months: Vec<MonthData> = (1..=ramp_months)
            .map(|month| {
                let visibility = ramp_visibility(current, target, month, ramp_months);
                let projection = ScenarioResult::compute(curve, inputs, visibility);
                MonthData::from_projection(month, projection)
            })
            .collect();

        let revenue: Vec<f64> = months.iter().map(|m| m.extra_revenue).collect();
        let total_extra_revenue: f64 = revenue.iter().sum();
        let payback = PaybackCalculator::compute(program_cost, &revenue);

        Self {
            months,
            total_extra_revenue,
            payback,
        }
    }

    /// The last ramp month, if any.
    pub fn final_month(&self) -> Option<&MonthData> {
        self.months.last()
    }
}

/// Linearly interpolated visibility for `month` of a `ramp_months` ramp.
pub fn ramp_visibility(
    current: Percentage,
    target: Percentage,
    month: u32,
    ramp_months: u32,
) -> Percentage {
    if month >= ramp_months {
        return target;
    }
    let step = (target.value() - current.value()) / f64::from(ramp_months);
    Percentage::new(current.value() + f64::from(month) * step)
}
