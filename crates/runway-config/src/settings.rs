//! Runway configuration file.

use std::path::Path;

use runway_core::ScenarioName;
use runway_scenarios::{InputOverrides, ScenarioRegistry};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Narrowest chart the renderer will draw, in columns.
pub const MIN_CHART_WIDTH: usize = 10;

/// Widest chart the renderer will draw, in columns.
pub const MAX_CHART_WIDTH: usize = 200;

// =============================================================================
// SECTIONS
// =============================================================================

/// `[model]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Scenario used when none is given on the command line.
    pub scenario: ScenarioName,
}

/// `[display]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Draw the cash-flow chart below the metrics table.
    pub show_chart: bool,
    /// Width of the longest chart bar, in columns.
    pub chart_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_chart: true,
            chart_width: 40,
        }
    }
}

// =============================================================================
// RUNWAY CONFIG
// =============================================================================

/// Top-level configuration.
///
/// Every section is optional; an empty file yields the defaults.
///
/// ```toml
/// [model]
/// scenario = "best_case"
///
/// [overrides]
/// cac = 150
/// gross_margin = 0.82
///
/// [display]
/// show_chart = true
/// chart_width = 50
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunwayConfig {
    /// Scenario selection.
    pub model: ModelConfig,
    /// Standing input overrides, applied beneath command-line overrides.
    pub overrides: InputOverrides,
    /// Rendering options.
    pub display: DisplayConfig,
}

impl RunwayConfig {
    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: RunwayConfig = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            scenario = %config.model.scenario,
            overrides = ?config.overrides.overridden_fields(),
            "loaded config"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes the config back to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for RunwayConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&self.display.chart_width) {
            errors.push(ValidationError::new(
                "display.chart_width",
                format!(
                    "{} is outside {}..={}",
                    self.display.chart_width, MIN_CHART_WIDTH, MAX_CHART_WIDTH
                ),
            ));
        }

        // Standing overrides must be usable with whichever preset is picked.
        for (scenario, preset) in ScenarioRegistry::global().scenarios() {
            if let Err(err) = self.overrides.apply(&preset) {
                errors.push(ValidationError::new(
                    "overrides",
                    format!("{} (with {} preset)", err, scenario),
                ));
                break;
            }
        }

        errors
    }
}
