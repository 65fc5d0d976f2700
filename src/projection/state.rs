//! Projection state tracking for a single scenario run

use crate::strategy::StrategyConfig;

/// Mutable state carried between months of one projection run
///
/// Each scenario run owns a fresh instance initialized from the same
/// `StrategyConfig`; nothing is shared across runs.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed; 0 before the first step)
    pub month: u32,

    /// Policies in force. Never clamped: a pathological input combination
    /// can drive this toward zero or negative, which is surfaced as-is.
    pub policies: f64,

    /// Customers. Same no-clamp behavior as policies.
    pub customers: f64,

    /// Cumulative cash position (sum of monthly EBITDA)
    pub cumulative_cash: f64,

    /// First month where cumulative cash crossed from <=0 to >0
    pub break_even_month: Option<u32>,
}

impl ProjectionState {
    /// Initialize state from a strategy at projection start
    pub fn from_config(config: &StrategyConfig) -> Self {
        Self {
            month: 0,
            policies: config.starting_policies,
            customers: config.starting_customers,
            cumulative_cash: 0.0,
            break_even_month: None,
        }
    }

    /// Bundling ratio from the current counts
    ///
    /// Precondition: customers > 0 (caller-validated). Violations propagate
    /// as non-finite values rather than being detected here.
    pub fn policies_per_customer(&self) -> f64 {
        self.policies / self.customers
    }

    /// Accumulate one month's net cash and record the first break-even crossing
    pub fn record_cash(&mut self, net_cashflow: f64, month: u32) {
        let before = self.cumulative_cash;
        self.cumulative_cash += net_cashflow;
        if self.break_even_month.is_none() && before <= 0.0 && self.cumulative_cash > 0.0 {
            self.break_even_month = Some(month);
        }
    }
}
