//! Scenario preset registry.
//!
//! The three presets are fixed data. The registry is built once, on first
//! use, and never mutated.

use std::sync::OnceLock;

use runway_core::{InputRecord, RunwayResult, ScenarioName};

/// Base case preset.
pub const BASE: InputRecord = in_domain(InputRecord::preset(200, 80, 24, 200, 250, 40000));

/// Best case preset.
pub const BEST_CASE: InputRecord = in_domain(InputRecord::preset(250, 85, 30, 180, 300, 35000));

/// Worst case preset.
pub const WORST_CASE: InputRecord = in_domain(InputRecord::preset(150, 70, 18, 250, 150, 45000));

/// Unwraps a preset during const evaluation; an out-of-domain table entry
/// fails the build.
const fn in_domain(preset: Option<InputRecord>) -> InputRecord {
    match preset {
        Some(record) => record,
        None => panic!("scenario preset outside the input domain"),
    }
}

/// Static registry instance.
static REGISTRY: OnceLock<ScenarioRegistry> = OnceLock::new();

/// Read-only mapping from [`ScenarioName`] to its preset [`InputRecord`].
///
/// Lookup by enum is total. Lookup by text fails with `InvalidScenario` for
/// anything that does not parse as a scenario name.
#[derive(Debug, Clone)]
pub struct ScenarioRegistry {
    presets: [InputRecord; 3],
}

impl ScenarioRegistry {
    /// Creates a registry holding the standard presets.
    pub fn new() -> Self {
        Self {
            presets: [BASE, BEST_CASE, WORST_CASE],
        }
    }

    /// Get the global registry instance.
    pub fn global() -> &'static ScenarioRegistry {
        REGISTRY.get_or_init(ScenarioRegistry::new)
    }

    /// Returns the preset for a scenario.
    #[must_use]
    pub fn get(&self, name: ScenarioName) -> InputRecord {
        self.presets[slot(name)]
    }

    /// Parses `name` and returns the scenario with its preset.
    pub fn get_named(&self, name: &str) -> RunwayResult<(ScenarioName, InputRecord)> {
        let scenario: ScenarioName = name.parse()?;
        Ok((scenario, self.get(scenario)))
    }

    /// Iterates every scenario with its preset, in presentation order.
    pub fn scenarios(&self) -> impl Iterator<Item = (ScenarioName, InputRecord)> + '_ {
        ScenarioName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

impl Default for ScenarioRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(name: ScenarioName) -> usize {
    match name {
        ScenarioName::Base => 0,
        ScenarioName::BestCase => 1,
        ScenarioName::WorstCase => 2,
    }
}

/// Returns the preset for `name` from the global registry.
#[must_use]
pub fn resolve(name: ScenarioName) -> InputRecord {
    ScenarioRegistry::global().get(name)
}

/// Parses `name` and returns its preset from the global registry.
pub fn resolve_named(name: &str) -> RunwayResult<InputRecord> {
    ScenarioRegistry::global()
        .get_named(name)
        .map(|(_, input)| input)
}
