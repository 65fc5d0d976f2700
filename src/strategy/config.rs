//! Strategy configuration structures for a projection run
//!
//! A `StrategyConfig` is supplied once per run and treated as read-only for
//! the run's duration. The engine performs no validation of its own; callers
//! are expected to run `validate()` before invoking the projection loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marketing channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Referral,
    Digital,
    Traditional,
    Partnerships,
}

impl Channel {
    /// All channels, in the order they are reported
    pub const ALL: [Channel; 4] = [
        Channel::Referral,
        Channel::Digital,
        Channel::Traditional,
        Channel::Partnerships,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Referral => "referral",
            Channel::Digital => "digital",
            Channel::Traditional => "traditional",
            Channel::Partnerships => "partnerships",
        }
    }
}

/// Monthly marketing spend per channel, in dollars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingSpend {
    pub referral: f64,
    pub digital: f64,
    pub traditional: f64,
    pub partnerships: f64,
}

impl MarketingSpend {
    /// Spend for a single channel
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Referral => self.referral,
            Channel::Digital => self.digital,
            Channel::Traditional => self.traditional,
            Channel::Partnerships => self.partnerships,
        }
    }

    /// Total monthly marketing spend across all channels
    pub fn total(&self) -> f64 {
        Channel::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// Staffing counts (FTE, fractional allowed) and annual compensation per role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staffing {
    pub producers: f64,
    pub service_staff: f64,
    pub admin_staff: f64,

    /// Annual compensation per producer FTE
    pub producer_comp: f64,
    /// Annual compensation per service FTE
    pub service_comp: f64,
    /// Annual compensation per admin FTE
    pub admin_comp: f64,
}

impl Staffing {
    /// Total FTE headcount across all roles
    pub fn total_fte(&self) -> f64 {
        self.producers + self.service_staff + self.admin_staff
    }

    /// Monthly fully-loaded staffing cost (salary x benefits multiplier / 12)
    pub fn monthly_cost(&self, benefits_multiplier: f64) -> f64 {
        let annual = self.producers * self.producer_comp
            + self.service_staff * self.service_comp
            + self.admin_staff * self.admin_comp;
        annual * benefits_multiplier / 12.0
    }
}

/// Active policy unit counts per product line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMix {
    pub auto: f64,
    pub home: f64,
    pub umbrella: f64,
    pub cyber: f64,
    pub commercial: f64,
}

impl ProductMix {
    /// Total policy units across all lines
    pub fn total_units(&self) -> f64 {
        self.auto + self.home + self.umbrella + self.cyber + self.commercial
    }

    /// Target policies-per-customer implied by the product mix
    ///
    /// New customers are assumed to bundle at the mix-implied ratio, floored
    /// at one policy per customer. Falls back to 1.0 when the mix is empty.
    pub fn target_policies_per_customer(&self, customers: f64) -> f64 {
        let units = self.total_units();
        if units <= 0.0 || customers <= 0.0 {
            1.0
        } else {
            (units / customers).max(1.0)
        }
    }
}

/// Commission structure of the agency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionStructure {
    /// Independent agency (highest commission rates)
    Independent,
    /// Captive agency (carrier-set rates)
    Captive,
    /// Hybrid independent/captive book
    Hybrid,
}

/// How producers are compensated for new business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesCompensation {
    /// Flat salary, already in staffing cost
    Salaried,
    /// Commission payout on each new policy sold
    CommissionBased,
}

/// Growth stage of the agency, used to size the productivity ramp window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Startup,
    Growth,
    Scale,
    Mature,
}

impl GrowthStage {
    /// Default months for new capacity to reach full productivity
    pub fn ramp_months(&self) -> u32 {
        match self {
            GrowthStage::Startup => 9,
            GrowthStage::Growth => 6,
            GrowthStage::Scale => 4,
            GrowthStage::Mature => 3,
        }
    }
}

/// Financial parameters of the strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialParams {
    /// Average annual premium per policy
    pub average_premium: f64,

    /// Commission structure (selects the agency commission rate)
    pub commission_structure: CommissionStructure,

    /// Fixed monthly overhead (rent, E&O, licenses, utilities)
    pub monthly_overhead: f64,

    /// Producer payout as a fraction of new-business commission
    pub commission_payout_pct: f64,

    /// Multiplier on salary for benefits/payroll taxes (e.g. 1.25)
    pub benefits_multiplier: f64,

    /// Producer compensation model for new business
    pub sales_compensation: SalesCompensation,
}

/// Technology and service program flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnologyFlags {
    /// E&O checklist automation
    #[serde(default)]
    pub eo_automation: bool,

    /// Proactive renewal review program
    #[serde(default)]
    pub renewal_program: bool,

    /// Cross-sell program (raises target policies-per-customer)
    #[serde(default)]
    pub cross_sell_program: bool,

    /// Concierge service model
    #[serde(default)]
    pub concierge_service: bool,

    /// Client newsletter / engagement program
    #[serde(default)]
    pub client_newsletter: bool,
}

/// Complete strategy configuration for one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Monthly marketing spend per channel
    pub marketing: MarketingSpend,

    /// Staffing counts and compensation
    pub staffing: Staffing,

    /// Current book composition by product line
    pub products: ProductMix,

    /// Financial parameters
    pub financial: FinancialParams,

    /// Technology and service program flags
    pub technology: TechnologyFlags,

    /// Growth stage (sizes the default ramp window)
    pub growth_stage: GrowthStage,

    /// Projection horizon in months
    pub horizon_months: u32,

    /// Policies in force at the start of the projection
    pub starting_policies: f64,

    /// Customers at the start of the projection
    pub starting_customers: f64,
}

/// Precondition violations the engine itself does not detect
///
/// The projection loop performs no validation and will propagate
/// divide-by-zero or negative-state results silently, so callers must
/// reject a bad configuration before invoking it.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("starting customer count must be positive, got {0}")]
    ZeroCustomers(f64),

    #[error("starting policy count must be non-negative, got {0}")]
    NegativePolicies(f64),

    #[error("projection horizon must be at least 1 month")]
    NonPositiveHorizon,

    #[error("marketing spend for {channel} must be non-negative, got {spend}")]
    NegativeSpend { channel: &'static str, spend: f64 },

    #[error("staffing counts must be non-negative")]
    NegativeStaffing,

    #[error("average premium must be positive, got {0}")]
    NonPositivePremium(f64),
}

impl StrategyConfig {
    /// Check preconditions the projection loop relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_customers <= 0.0 {
            return Err(ConfigError::ZeroCustomers(self.starting_customers));
        }
        if self.starting_policies < 0.0 {
            return Err(ConfigError::NegativePolicies(self.starting_policies));
        }
        if self.horizon_months < 1 {
            return Err(ConfigError::NonPositiveHorizon);
        }
        for channel in Channel::ALL {
            let spend = self.marketing.get(channel);
            if spend < 0.0 {
                return Err(ConfigError::NegativeSpend {
                    channel: channel.as_str(),
                    spend,
                });
            }
        }
        if self.staffing.producers < 0.0
            || self.staffing.service_staff < 0.0
            || self.staffing.admin_staff < 0.0
        {
            return Err(ConfigError::NegativeStaffing);
        }
        if self.financial.average_premium <= 0.0 {
            return Err(ConfigError::NonPositivePremium(self.financial.average_premium));
        }
        Ok(())
    }

    /// Example configuration for a mid-size personal-lines agency
    ///
    /// Mirrors the bundled demo inputs so the CLI runs out of the box.
    pub fn example_agency() -> Self {
        Self {
            marketing: MarketingSpend {
                referral: 1_500.0,
                digital: 2_500.0,
                traditional: 800.0,
                partnerships: 1_200.0,
            },
            staffing: Staffing {
                producers: 3.0,
                service_staff: 3.0,
                admin_staff: 1.0,
                producer_comp: 75_000.0,
                service_comp: 50_000.0,
                admin_comp: 42_000.0,
            },
            products: ProductMix {
                auto: 1_800.0,
                home: 1_100.0,
                umbrella: 180.0,
                cyber: 40.0,
                commercial: 80.0,
            },
            financial: FinancialParams {
                average_premium: 1_800.0,
                commission_structure: CommissionStructure::Independent,
                monthly_overhead: 5_500.0,
                commission_payout_pct: 0.30,
                benefits_multiplier: 1.25,
                sales_compensation: SalesCompensation::CommissionBased,
            },
            technology: TechnologyFlags {
                eo_automation: true,
                renewal_program: true,
                cross_sell_program: false,
                concierge_service: false,
                client_newsletter: true,
            },
            growth_stage: GrowthStage::Growth,
            horizon_months: 36,
            starting_policies: 3_200.0,
            starting_customers: 2_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_example_config_is_valid() {
        assert!(StrategyConfig::example_agency().validate().is_ok());
    }

    #[test]
    fn test_zero_customers_rejected() {
        let mut config = StrategyConfig::example_agency();
        config.starting_customers = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCustomers(0.0)));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut config = StrategyConfig::example_agency();
        config.horizon_months = 0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveHorizon));
    }

    #[test]
    fn test_negative_spend_rejected() {
        let mut config = StrategyConfig::example_agency();
        config.marketing.digital = -100.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeSpend { channel: "digital", .. })
        ));
    }

    #[test]
    fn test_marketing_total() {
        let config = StrategyConfig::example_agency();
        assert_relative_eq!(config.marketing.total(), 6_000.0);
    }

    #[test]
    fn test_target_ppc_from_mix() {
        let config = StrategyConfig::example_agency();
        // 3200 units over 2000 customers
        assert_relative_eq!(
            config.products.target_policies_per_customer(config.starting_customers),
            1.6
        );
    }

    #[test]
    fn test_target_ppc_floored_at_one() {
        let mix = ProductMix {
            auto: 100.0,
            home: 0.0,
            umbrella: 0.0,
            cyber: 0.0,
            commercial: 0.0,
        };
        assert_relative_eq!(mix.target_policies_per_customer(500.0), 1.0);
    }

    #[test]
    fn test_staffing_monthly_cost() {
        let config = StrategyConfig::example_agency();
        // (3*75k + 3*50k + 1*42k) * 1.25 / 12
        assert_relative_eq!(
            config.staffing.monthly_cost(1.25),
            417_000.0 * 1.25 / 12.0
        );
    }
}
