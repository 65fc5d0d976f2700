//! Agency Growth - projection and benchmarking engine for insurance agencies
//!
//! This library provides:
//! - Month-by-month growth projections (policies, customers, revenue, EBITDA, cash)
//! - A channel funnel model converting marketing spend into new customers
//! - A bundling-driven retention model with technology/service boosts
//! - Conservative/Moderate/Aggressive scenario generation from one base config
//! - Classification of final-state metrics against industry benchmarks

pub mod assumptions;
pub mod benchmark;
pub mod projection;
pub mod scenario;
pub mod strategy;

// Re-export commonly used types
pub use assumptions::{Assumptions, BenchmarkTable, ChannelCoefficients, RetentionModel};
pub use benchmark::BenchmarkMetrics;
pub use projection::{
    MonthlyState, ProjectionConfig, ProjectionEngine, ScenarioKind, ScenarioResult,
};
pub use scenario::{GrowthProjection, ScenarioRunner, ScenarioSet};
pub use strategy::StrategyConfig;
