//! Runway Configuration Layer
//!
//! Loads the optional TOML configuration file used by the Runway command-line
//! tools: the default scenario, standing input overrides, and display
//! settings.
//!
//! # Example
//!
//! ```rust
//! use runway_config::RunwayConfig;
//! use runway_core::ScenarioName;
//!
//! let config = RunwayConfig::from_toml_str(
//!     r#"
//!     [model]
//!     scenario = "best_case"
//!
//!     [overrides]
//!     cac = 150
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.model.scenario, ScenarioName::BestCase);
//! assert!(!config.overrides.is_empty());
//! ```
//!
//! # Override Precedence
//!
//! Overrides from the config file sit between the scenario preset and any
//! overrides given on the command line:
//!
//! preset < `[overrides]` in the config file < command-line flags

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{DisplayConfig, ModelConfig, RunwayConfig, MAX_CHART_WIDTH, MIN_CHART_WIDTH};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "RUNWAY_CONFIG";

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::settings::{DisplayConfig, ModelConfig, RunwayConfig};
}
