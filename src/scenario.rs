//! Scenario runner producing the three named variants of one strategy
//!
//! Each scenario re-runs the full monthly loop from fresh state so that
//! month-by-month compounding is preserved; final aggregates are never
//! scaled after the fact. Runs are independent and computed in parallel.

use log::info;

use crate::assumptions::Assumptions;
use crate::benchmark::BenchmarkMetrics;
use crate::projection::{ProjectionConfig, ProjectionEngine, ScenarioKind, ScenarioResult};
use crate::strategy::StrategyConfig;

/// Pre-loaded scenario runner
///
/// Holds the assumption tables once, then runs any number of projections
/// against them.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

/// The three scenario results of a full run, in fixed order
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    pub conservative: ScenarioResult,
    pub moderate: ScenarioResult,
    pub aggressive: ScenarioResult,
}

impl ScenarioSet {
    /// Results in their fixed reporting order
    pub fn in_order(&self) -> [&ScenarioResult; 3] {
        [&self.conservative, &self.moderate, &self.aggressive]
    }

    /// Result for a specific scenario
    pub fn get(&self, kind: ScenarioKind) -> &ScenarioResult {
        match kind {
            ScenarioKind::Conservative => &self.conservative,
            ScenarioKind::Moderate => &self.moderate,
            ScenarioKind::Aggressive => &self.aggressive,
        }
    }
}

/// Output of a full run: three scenarios plus benchmark classification
///
/// Benchmarks derive from the Moderate scenario's final state by convention.
#[derive(Debug, Clone)]
pub struct GrowthProjection {
    pub scenarios: ScenarioSet,
    pub benchmarks: BenchmarkMetrics,
}

impl ScenarioRunner {
    /// Create runner with the default industry assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_industry(),
        }
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run a single projection with the given config
    pub fn run(&self, strategy: &StrategyConfig, config: ProjectionConfig) -> ScenarioResult {
        let engine = ProjectionEngine::new(self.assumptions.clone(), config);
        engine.project(strategy)
    }

    /// Run all three scenarios for one strategy
    ///
    /// Scenarios share no mutable state, so they run in parallel. Each
    /// member is bit-identical to a standalone `run` with the same profile.
    pub fn run_all(&self, strategy: &StrategyConfig) -> ScenarioSet {
        info!(
            "running 3 scenarios over {} months",
            strategy.horizon_months
        );

        // Independent runs with no shared mutable state
        let (conservative, (moderate, aggressive)) = rayon::join(
            || self.run(strategy, ProjectionConfig::conservative()),
            || {
                rayon::join(
                    || self.run(strategy, ProjectionConfig::moderate()),
                    || self.run(strategy, ProjectionConfig::aggressive()),
                )
            },
        );

        ScenarioSet {
            conservative,
            moderate,
            aggressive,
        }
    }

    /// Full run: all scenarios plus benchmark classification of the Moderate case
    pub fn run_full(&self, strategy: &StrategyConfig) -> GrowthProjection {
        let scenarios = self.run_all(strategy);
        let benchmarks = BenchmarkMetrics::evaluate(&scenarios.moderate, strategy, &self.assumptions);
        GrowthProjection {
            scenarios,
            benchmarks,
        }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
