//! Strategy configuration - the caller-supplied inputs for a projection run

mod config;
pub mod loader;

pub use config::{
    Channel, CommissionStructure, ConfigError, FinancialParams, GrowthStage, MarketingSpend,
    ProductMix, SalesCompensation, Staffing, StrategyConfig, TechnologyFlags,
};
pub use loader::load_strategy;
