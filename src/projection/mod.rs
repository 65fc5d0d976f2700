//! Monthly projection engine

mod engine;
mod monthly;
mod state;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use monthly::{MonthlyState, ScenarioKind, ScenarioResult, ScenarioSummary};
pub use state::ProjectionState;

/// Division returning 0.0 when the denominator is not positive
///
/// Central guard for the per-step CAC/margin/LTV math. Callers must treat
/// the 0.0 sentinel as "no activity", not as a good result.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
