//! Side-by-side scenario comparison.

use serde::Serialize;

use runway_core::{MetricsResult, RunwayResult, ScenarioName};
use runway_scenarios::{InputOverrides, ScenarioRegistry};

use crate::engine::compute;

/// One scenario's computed metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// The preset the input started from.
    pub scenario: ScenarioName,
    /// Metrics for the preset with overrides applied.
    pub result: MetricsResult,
}

/// Computes every preset with the same `overrides` applied.
///
/// Results come back in registry order (Base, Best Case, Worst Case). Fails
/// on the first scenario whose overridden input is out of domain.
pub fn compare_scenarios(overrides: &InputOverrides) -> RunwayResult<Vec<ScenarioOutcome>> {
    ScenarioRegistry::global()
        .scenarios()
        .map(|(scenario, preset)| {
            let input = overrides.apply(&preset)?;
            Ok(ScenarioOutcome {
                scenario,
                result: compute(&input)?,
            })
        })
        .collect()
}
