//! Monthly output structures for projections

use serde::{Deserialize, Serialize};

/// Named scenario, always produced in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Conservative,
    Moderate,
    Aggressive,
}

impl ScenarioKind {
    /// All scenarios in their fixed reporting order
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Moderate,
        ScenarioKind::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Moderate => "Moderate",
            ScenarioKind::Aggressive => "Aggressive",
        }
    }
}

/// One month of projection output
///
/// Created by the simulation loop one step at a time, appended in month
/// order, and never mutated after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyState {
    /// Projection month (1-indexed)
    pub month: u32,

    /// New customers acquired this month (funnel x multiplier x ramp)
    pub new_customers: f64,

    /// New policies written this month
    pub new_policies: f64,

    /// Policies in force at end of month
    pub policies: f64,

    /// Customers at end of month
    pub customers: f64,

    /// Bundling ratio at end of month
    pub policies_per_customer: f64,

    /// Annual retention resolved for this step
    pub annual_retention: f64,

    /// Realized monthly survival probability used this step
    pub monthly_retention: f64,

    /// Commission revenue this month
    pub revenue: f64,

    /// Total operating costs this month
    pub costs: f64,

    /// Revenue minus costs
    pub ebitda: f64,

    /// EBITDA / revenue when revenue > 0, else 0
    pub ebitda_margin: f64,

    /// Marketing spend / new customers; 0 when no customers were acquired
    pub cac: f64,

    /// Customer lifetime value net of acquisition cost
    pub ltv: f64,

    /// LTV / CAC; 0 when CAC is 0
    pub ltv_cac_ratio: f64,

    /// Cumulative cash position through this month
    pub cumulative_cash: f64,
}

/// Complete result of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Which scenario produced this result
    pub scenario: ScenarioKind,

    /// Ordered monthly states, exactly `horizon_months` entries
    pub months: Vec<MonthlyState>,

    /// Sum of revenue over the horizon
    pub total_revenue: f64,

    /// Sum of costs over the horizon
    pub total_cost: f64,

    /// First month where cumulative cash crossed from <=0 to >0
    pub break_even_month: Option<u32>,
}

impl ScenarioResult {
    pub fn new(scenario: ScenarioKind) -> Self {
        Self {
            scenario,
            months: Vec::new(),
            total_revenue: 0.0,
            total_cost: 0.0,
            break_even_month: None,
        }
    }

    /// Add one month of output and fold it into the aggregates
    pub fn add_month(&mut self, row: MonthlyState) {
        self.total_revenue += row.revenue;
        self.total_cost += row.costs;
        self.months.push(row);
    }

    /// Net profit over the horizon
    pub fn net_profit(&self) -> f64 {
        self.total_revenue - self.total_cost
    }

    /// Final-month state, if any months were projected
    pub fn final_state(&self) -> Option<&MonthlyState> {
        self.months.last()
    }

    /// Convenience snapshot of aggregates and final-month values
    pub fn summary(&self) -> ScenarioSummary {
        let last = self.final_state();
        ScenarioSummary {
            scenario: self.scenario,
            total_months: self.months.len() as u32,
            total_revenue: self.total_revenue,
            total_cost: self.total_cost,
            net_profit: self.net_profit(),
            final_policies: last.map(|m| m.policies).unwrap_or(0.0),
            final_customers: last.map(|m| m.customers).unwrap_or(0.0),
            final_monthly_revenue: last.map(|m| m.revenue).unwrap_or(0.0),
            final_ebitda_margin: last.map(|m| m.ebitda_margin).unwrap_or(0.0),
            break_even_month: self.break_even_month,
        }
    }
}

/// Summary statistics for a scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: ScenarioKind,
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub final_policies: f64,
    pub final_customers: f64,
    pub final_monthly_revenue: f64,
    pub final_ebitda_margin: f64,
    pub break_even_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aggregates_fold_per_month() {
        let mut result = ScenarioResult::new(ScenarioKind::Moderate);
        for month in 1..=3 {
            result.add_month(MonthlyState {
                month,
                revenue: 100.0,
                costs: 60.0,
                ..Default::default()
            });
        }
        assert_relative_eq!(result.total_revenue, 300.0);
        assert_relative_eq!(result.total_cost, 180.0);
        assert_relative_eq!(result.net_profit(), 120.0);
        assert_eq!(result.summary().total_months, 3);
    }

    #[test]
    fn test_empty_result_summary_is_zeroed() {
        let result = ScenarioResult::new(ScenarioKind::Conservative);
        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_relative_eq!(summary.final_policies, 0.0);
        assert!(result.final_state().is_none());
    }
}
