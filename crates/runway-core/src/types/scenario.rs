//! Scenario names.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::RunwayError;

/// The closed set of named scenario presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ScenarioName {
    /// Expected case.
    #[default]
    Base,
    /// Optimistic case.
    BestCase,
    /// Pessimistic case.
    WorstCase,
}

impl ScenarioName {
    /// Every scenario, in presentation order.
    pub const ALL: [ScenarioName; 3] = [
        ScenarioName::Base,
        ScenarioName::BestCase,
        ScenarioName::WorstCase,
    ];

    /// Returns the display name ("Best Case").
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ScenarioName::Base => "Base",
            ScenarioName::BestCase => "Best Case",
            ScenarioName::WorstCase => "Worst Case",
        }
    }

    /// Returns the machine key ("best_case").
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ScenarioName::Base => "base",
            ScenarioName::BestCase => "best_case",
            ScenarioName::WorstCase => "worst_case",
        }
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ScenarioName {
    type Err = RunwayError;

    /// Case-insensitive; spaces, `-` and `_` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match folded.as_str() {
            "base" => Ok(ScenarioName::Base),
            "bestcase" | "best" => Ok(ScenarioName::BestCase),
            "worstcase" | "worst" => Ok(ScenarioName::WorstCase),
            _ => Err(RunwayError::invalid_scenario(s)),
        }
    }
}

impl Serialize for ScenarioName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ScenarioName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
