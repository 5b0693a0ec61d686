//! Payback period against a fixed program cost.

use serde::{Deserialize, Serialize};

use super::DAYS_PER_MONTH;

/// Default cost of the visibility program, in currency units.
pub const DEFAULT_PROGRAM_COST: f64 = 5550.0;

/// When the program cost is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Payback {
    /// Cost recovered after `days` days of extra revenue.
    Reached { days: f64 },
    /// Cost not recovered within the ramp horizon.
    Unreached,
}

impl Payback {
    /// Days to payback, if reached.
    pub fn days(&self) -> Option<f64> {
        match self {
            Payback::Reached { days } => Some(*days),
            Payback::Unreached => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Payback::Reached { .. })
    }
}

/// Payback-day calculation.
pub struct PaybackCalculator;

impl PaybackCalculator {
    /// Computes days until `program_cost` is recovered from monthly extra revenue.
    ///
    /// # Algorithm
    /// Scan months accumulating revenue. At the first month `i` (0-indexed)
    /// where `cumulative + revenue[i] >= cost`:
    /// `days = 30·i + 30·(cost - cumulative) / revenue[i]`.
    /// When month 1 alone covers the cost this reduces to `30·cost / revenue[0]`.
    ///
    /// # Edge Cases
    /// - No months: `Unreached`
    /// - Cost already covered on entry to a month (zero cost): `30·i` days
    /// - Never covered within the horizon: `Unreached`
    pub fn compute(program_cost: f64, monthly_revenue: &[f64]) -> Payback {
        let mut cumulative = 0.0;

        for (i, &revenue) in monthly_revenue.iter().enumerate() {
            if cumulative + revenue >= program_cost {
                let remaining = program_cost - cumulative;
                let into_month = if remaining <= 0.0 {
                    0.0
                } else {
                    DAYS_PER_MONTH * (remaining / revenue)
                };
                return Payback::Reached {
                    days: DAYS_PER_MONTH * i as f64 + into_month,
                };
            }
            cumulative += revenue;
        }

        Payback::Unreached
    }
}
