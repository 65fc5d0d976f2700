//! Retention model driven by the bundling ratio
//!
//! Annual retention is chosen by a three-tier, first-match-wins table
//! evaluated high to low on policies-per-customer, then raised by additive
//! technology/service boosts and clamped below a hard ceiling. The annual
//! rate decomposes geometrically into a monthly survival rate.

use serde::{Deserialize, Serialize};

use crate::strategy::TechnologyFlags;

/// Additive annual retention boosts per program flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionBoosts {
    pub eo_automation: f64,
    pub renewal_program: f64,
    pub concierge_service: f64,
    pub client_newsletter: f64,
}

/// Bundling-tier retention table with boost and clamp parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionModel {
    /// Policies-per-customer threshold for the optimal tier (inclusive)
    pub optimal_threshold: f64,
    /// Annual retention at the optimal tier
    pub optimal_rate: f64,

    /// Policies-per-customer threshold for the bundled tier (inclusive)
    pub bundled_threshold: f64,
    /// Annual retention at the bundled tier
    pub bundled_rate: f64,

    /// Annual retention for a monoline book
    pub monoline_rate: f64,

    /// Hard ceiling on annual retention regardless of stacked boosts
    pub max_annual: f64,

    /// Per-flag boosts
    pub boosts: RetentionBoosts,
}

impl RetentionModel {
    /// Default tiers and boosts from the industry reference tables
    pub fn default_industry() -> Self {
        Self {
            optimal_threshold: 1.8,
            optimal_rate: 0.95,
            bundled_threshold: 1.5,
            bundled_rate: 0.91,
            monoline_rate: 0.67,
            max_annual: 0.98,
            boosts: RetentionBoosts {
                eo_automation: 0.02,
                renewal_program: 0.03,
                concierge_service: 0.02,
                client_newsletter: 0.015,
            },
        }
    }

    /// Base annual retention from the bundling tier table
    pub fn base_annual(&self, policies_per_customer: f64) -> f64 {
        if policies_per_customer >= self.optimal_threshold {
            self.optimal_rate
        } else if policies_per_customer >= self.bundled_threshold {
            self.bundled_rate
        } else {
            self.monoline_rate
        }
    }

    /// Sum of boosts for the enabled flags
    ///
    /// `force_all` applies every boost regardless of configuration (used by
    /// the aggressive scenario's retention ceiling).
    pub fn boost_total(&self, flags: &TechnologyFlags, force_all: bool) -> f64 {
        let mut total = 0.0;
        if force_all || flags.eo_automation {
            total += self.boosts.eo_automation;
        }
        if force_all || flags.renewal_program {
            total += self.boosts.renewal_program;
        }
        if force_all || flags.concierge_service {
            total += self.boosts.concierge_service;
        }
        if force_all || flags.client_newsletter {
            total += self.boosts.client_newsletter;
        }
        total
    }

    /// Annual retention: tier + boosts + scenario shift, clamped to the ceiling
    pub fn annual_rate(
        &self,
        policies_per_customer: f64,
        flags: &TechnologyFlags,
        force_all_boosts: bool,
        scenario_shift: f64,
    ) -> f64 {
        let raw = self.base_annual(policies_per_customer)
            + self.boost_total(flags, force_all_boosts)
            + scenario_shift;
        raw.min(self.max_annual)
    }

    /// Convert an annual survival probability into a monthly one
    ///
    /// Geometric decomposition: annual^(1/12). Linear division by 12 would
    /// overstate monthly churn and is deliberately not used.
    pub fn monthly_from_annual(annual: f64) -> f64 {
        annual.powf(1.0 / 12.0)
    }
}
