//! Core projection engine: the monthly simulation loop
//!
//! Advances policies, customers, revenue, cost, EBITDA, and cash position
//! one month at a time, consuming the channel funnel and retention model
//! each step. The loop performs no input validation; callers run
//! `StrategyConfig::validate` first (see `strategy::ConfigError`).

use log::debug;

use super::monthly::{MonthlyState, ScenarioKind, ScenarioResult};
use super::state::ProjectionState;
use super::safe_div;
use crate::assumptions::{Assumptions, RetentionModel};
use crate::strategy::{SalesCompensation, StrategyConfig};

/// Cross-sell program boost to the target bundling ratio
const CROSS_SELL_TARGET_BOOST: f64 = 1.15;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Which scenario this run represents
    pub scenario: ScenarioKind,

    /// Multiplier on funnel conversions (0.70 conservative, 1.0 moderate, ...)
    pub conversion_multiplier: f64,

    /// Additive shift on annual retention, applied before the clamp
    pub retention_shift: f64,

    /// Apply every retention boost regardless of configured flags
    pub force_all_boosts: bool,

    /// Override the growth-stage ramp window; 0 disables ramping entirely
    pub ramp_months: Option<u32>,
}

impl ProjectionConfig {
    /// Conservative profile: 25th-percentile conversions, softer retention
    pub fn conservative() -> Self {
        Self {
            scenario: ScenarioKind::Conservative,
            conversion_multiplier: 0.70,
            retention_shift: -0.02,
            force_all_boosts: false,
            ramp_months: None,
        }
    }

    /// Moderate profile: the baseline/recommended case
    pub fn moderate() -> Self {
        Self {
            scenario: ScenarioKind::Moderate,
            conversion_multiplier: 1.0,
            retention_shift: 0.0,
            force_all_boosts: false,
            ramp_months: None,
        }
    }

    /// Aggressive profile: high conversions, every retention boost applied
    pub fn aggressive() -> Self {
        Self {
            scenario: ScenarioKind::Aggressive,
            conversion_multiplier: 1.18,
            retention_shift: 0.0,
            force_all_boosts: true,
            ramp_months: None,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::moderate()
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the monthly loop for a single strategy
    ///
    /// Produces exactly `horizon_months` rows with strictly increasing
    /// 1-indexed month numbers. Policies and customers are never clamped;
    /// degenerate states from pathological inputs are surfaced as-is.
    pub fn project(&self, strategy: &StrategyConfig) -> ScenarioResult {
        debug!(
            "projecting {} scenario over {} months",
            self.config.scenario.as_str(),
            strategy.horizon_months
        );

        let mut result = ScenarioResult::new(self.config.scenario);
        let mut state = ProjectionState::from_config(strategy);

        let ramp_months = self
            .config
            .ramp_months
            .unwrap_or_else(|| strategy.growth_stage.ramp_months());

        let commission_rate = self
            .assumptions
            .financial
            .commission
            .rate(strategy.financial.commission_structure);

        // Target bundling ratio for new business, fixed for the run
        let mut target_ppc = strategy
            .products
            .target_policies_per_customer(strategy.starting_customers);
        if strategy.technology.cross_sell_program {
            target_ppc *= CROSS_SELL_TARGET_BOOST;
        }

        // Recurring monthly cost components do not vary across months
        let marketing_total = strategy.marketing.total();
        let staffing_cost = strategy
            .staffing
            .monthly_cost(strategy.financial.benefits_multiplier);
        let tech_cost = self
            .assumptions
            .financial
            .technology
            .monthly_total(&strategy.technology);

        for month in 1..=strategy.horizon_months {
            state.month = month;

            // New hires/programs reach full productivity linearly over the window
            let ramp = if ramp_months == 0 {
                1.0
            } else {
                (month as f64 / ramp_months as f64).min(1.0)
            };

            let new_customers = self.assumptions.channels.total_converted(&strategy.marketing)
                * self.config.conversion_multiplier
                * ramp;

            // Retention resolves on the prior step's bundling ratio
            let annual_retention = self.assumptions.retention.annual_rate(
                state.policies_per_customer(),
                &strategy.technology,
                self.config.force_all_boosts,
                self.config.retention_shift,
            );
            let monthly_retention = RetentionModel::monthly_from_annual(annual_retention);

            let policies_lost = state.policies * (1.0 - monthly_retention);
            let customers_lost = state.customers * (1.0 - monthly_retention);
            let new_policies = new_customers * target_ppc;

            state.policies += new_policies - policies_lost;
            state.customers += new_customers - customers_lost;

            let revenue =
                state.policies * (strategy.financial.average_premium / 12.0) * commission_rate;

            let new_sales_commission = match strategy.financial.sales_compensation {
                SalesCompensation::CommissionBased => {
                    new_policies
                        * strategy.financial.average_premium
                        * commission_rate
                        * strategy.financial.commission_payout_pct
                }
                SalesCompensation::Salaried => 0.0,
            };
            let costs = marketing_total
                + staffing_cost
                + tech_cost
                + strategy.financial.monthly_overhead
                + new_sales_commission;

            let ebitda = revenue - costs;
            let ebitda_margin = safe_div(ebitda, revenue);

            let cac = safe_div(marketing_total, new_customers);

            let policies_per_customer = state.policies_per_customer();
            let annual_revenue_per_customer =
                policies_per_customer * strategy.financial.average_premium * commission_rate;
            let ltv = lifetime_value(annual_revenue_per_customer, annual_retention, cac);
            let ltv_cac_ratio = safe_div(ltv, cac);

            state.record_cash(ebitda, month);

            result.add_month(MonthlyState {
                month,
                new_customers,
                new_policies,
                policies: state.policies,
                customers: state.customers,
                policies_per_customer,
                annual_retention,
                monthly_retention,
                revenue,
                costs,
                ebitda,
                ebitda_margin,
                cac,
                ltv,
                ltv_cac_ratio,
                cumulative_cash: state.cumulative_cash,
            });
        }

        result.break_even_month = state.break_even_month;
        result
    }
}

/// Geometric-series customer valuation, net of acquisition cost
///
/// (annual revenue per customer x retention) / (1 - retention) - CAC.
/// Returns -CAC at retention = 1; the retention clamp keeps that
/// unreachable in practice.
pub fn lifetime_value(annual_revenue_per_customer: f64, annual_retention: f64, cac: f64) -> f64 {
    safe_div(
        annual_revenue_per_customer * annual_retention,
        1.0 - annual_retention,
    ) - cac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::MarketingSpend;
    use approx::assert_relative_eq;

    fn engine(config: ProjectionConfig) -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::default_industry(), config)
    }

    /// Referral-only config matching the canonical hand-computed example
    fn referral_only_config() -> StrategyConfig {
        let mut strategy = StrategyConfig::example_agency();
        strategy.starting_policies = 500.0;
        strategy.starting_customers = 350.0;
        strategy.marketing = MarketingSpend {
            referral: 500.0,
            digital: 0.0,
            traditional: 0.0,
            partnerships: 0.0,
        };
        strategy.horizon_months = 1;
        strategy
    }

    #[test]
    fn test_sequence_length_and_month_indices() {
        let strategy = StrategyConfig::example_agency();
        let result = engine(ProjectionConfig::moderate()).project(&strategy);

        assert_eq!(result.months.len(), strategy.horizon_months as usize);
        for (i, row) in result.months.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_month_one_new_customers_before_churn() {
        // $500 referral at $50/lead, 60% conversion: exactly 6 new customers
        let strategy = referral_only_config();
        let config = ProjectionConfig {
            ramp_months: Some(0),
            ..ProjectionConfig::moderate()
        };
        let result = engine(config).project(&strategy);

        assert_relative_eq!(result.months[0].new_customers, 6.0);
    }

    #[test]
    fn test_zero_marketing_means_no_customers_and_zero_cac() {
        let mut strategy = StrategyConfig::example_agency();
        strategy.marketing = MarketingSpend {
            referral: 0.0,
            digital: 0.0,
            traditional: 0.0,
            partnerships: 0.0,
        };
        strategy.horizon_months = 12;

        let result = engine(ProjectionConfig::moderate()).project(&strategy);
        for row in &result.months {
            assert_relative_eq!(row.new_customers, 0.0);
            assert_relative_eq!(row.cac, 0.0);
        }
    }

    #[test]
    fn test_retention_follows_tier_table() {
        // 500 policies / 350 customers = 1.4286: monoline tier
        let strategy = referral_only_config();
        let result = engine(ProjectionConfig::moderate()).project(&strategy);
        let row = &result.months[0];

        // example_agency flags: E&O + renewal + newsletter = +0.065
        assert_relative_eq!(row.annual_retention, 0.735, epsilon = 1e-12);
        assert_relative_eq!(
            row.monthly_retention,
            0.735_f64.powf(1.0 / 12.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ramp_scales_early_months_linearly() {
        let mut strategy = referral_only_config();
        strategy.horizon_months = 8;
        let config = ProjectionConfig {
            ramp_months: Some(4),
            ..ProjectionConfig::moderate()
        };
        let result = engine(config).project(&strategy);

        assert_relative_eq!(result.months[0].new_customers, 6.0 * 0.25);
        assert_relative_eq!(result.months[1].new_customers, 6.0 * 0.50);
        assert_relative_eq!(result.months[3].new_customers, 6.0);
        // Fully ramped thereafter
        assert_relative_eq!(result.months[7].new_customers, 6.0);
    }

    #[test]
    fn test_conversion_multiplier_scales_acquisition() {
        let strategy = referral_only_config();
        let config = ProjectionConfig {
            ramp_months: Some(0),
            ..ProjectionConfig::conservative()
        };
        let result = engine(config).project(&strategy);
        assert_relative_eq!(result.months[0].new_customers, 6.0 * 0.70);
    }

    #[test]
    fn test_lifetime_value_formula() {
        // (1000 * 0.90) / 0.10 - 100 = 8900
        assert_relative_eq!(lifetime_value(1_000.0, 0.90, 100.0), 8_900.0);
    }

    #[test]
    fn test_degenerate_state_is_not_clamped() {
        // No acquisition and monoline churn: the book decays and cash goes
        // negative, but nothing is clamped or flagged by the loop itself.
        let mut strategy = StrategyConfig::example_agency();
        strategy.marketing = MarketingSpend {
            referral: 0.0,
            digital: 0.0,
            traditional: 0.0,
            partnerships: 0.0,
        };
        strategy.technology = Default::default();
        strategy.starting_policies = 100.0;
        strategy.starting_customers = 100.0;
        strategy.horizon_months = 24;

        let result = engine(ProjectionConfig::moderate()).project(&strategy);
        let first = &result.months[0];
        let last = result.final_state().unwrap();
        assert!(last.policies < first.policies);
        assert!(last.cumulative_cash < 0.0);
        assert_eq!(result.break_even_month, None);
    }

    #[test]
    fn test_revenue_uses_commission_rate_on_monthly_premium() {
        let strategy = referral_only_config();
        let config = ProjectionConfig {
            ramp_months: Some(0),
            ..ProjectionConfig::moderate()
        };
        let result = engine(config).project(&strategy);
        let row = &result.months[0];

        // Independent structure: 12% of (annual premium / 12) per policy
        assert_relative_eq!(
            row.revenue,
            row.policies * (1_800.0 / 12.0) * 0.12,
            epsilon = 1e-9
        );
    }
}
