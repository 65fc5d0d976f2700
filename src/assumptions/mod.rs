//! Industry assumptions: channel coefficients, retention tiers, commission
//! rates, technology charges, and benchmark thresholds
//!
//! All constant tables live here as an immutable structure passed into the
//! engine at construction time, so tests can substitute alternate tables
//! without touching engine logic.

mod benchmarks;
mod channels;
mod financial;
mod retention;

pub use benchmarks::{
    BenchmarkTable, BundlingTier, EbitdaStatus, LtvCacStatus, RevenueEfficiency, RuleOf20Rating,
};
pub use channels::{ChannelCoefficients, ChannelMetrics, FunnelCoefficients};
pub use financial::{CommissionRates, FinancialAssumptions, TechnologyCosts};
pub use retention::{RetentionBoosts, RetentionModel};

/// Container for all projection assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub channels: ChannelCoefficients,
    pub retention: RetentionModel,
    pub financial: FinancialAssumptions,
    pub benchmarks: BenchmarkTable,
}

impl Assumptions {
    /// Assumptions with default values matching the industry reference tables
    pub fn default_industry() -> Self {
        Self {
            channels: ChannelCoefficients::default_industry(),
            retention: RetentionModel::default_industry(),
            financial: FinancialAssumptions::default_industry(),
            benchmarks: BenchmarkTable::default_industry(),
        }
    }
}
