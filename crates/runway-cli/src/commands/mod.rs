//! CLI command implementations.

pub mod compare;
pub mod model;
pub mod scenarios;

pub use compare::CompareArgs;
pub use model::ModelArgs;
pub use scenarios::ScenariosArgs;

use clap::Args;
use runway_config::RunwayConfig;
use runway_core::InputField;
use runway_scenarios::InputOverrides;

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Selected output format.
    pub format: OutputFormat,
    /// Loaded configuration (defaults when no file was given).
    pub config: RunwayConfig,
    /// Suppress info lines and the chart.
    pub quiet: bool,
}

/// Input overrides accepted by `model` and `compare`.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Average revenue per user per month ($)
    #[arg(long)]
    pub arpu: Option<String>,

    /// Gross margin, as a fraction (0.8) or percentage (80%)
    #[arg(long)]
    pub gross_margin: Option<String>,

    /// Customer lifetime in months
    #[arg(long)]
    pub lifetime: Option<String>,

    /// Customer acquisition cost ($)
    #[arg(long)]
    pub cac: Option<String>,

    /// New customers acquired per month
    #[arg(long)]
    pub new_customers: Option<String>,

    /// Fixed monthly costs ($)
    #[arg(long)]
    pub fixed_costs: Option<String>,

    /// Override any input as key=value (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
}

impl OverrideArgs {
    /// Collects the command-line overrides. Named flags win over `--set`.
    pub fn to_overrides(&self) -> CliResult<InputOverrides> {
        let mut overrides =
            InputOverrides::from_assignments(self.assignments.iter().map(String::as_str))?;

        let flags = [
            (InputField::Arpu, &self.arpu),
            (InputField::GrossMargin, &self.gross_margin),
            (InputField::Lifetime, &self.lifetime),
            (InputField::Cac, &self.cac),
            (InputField::NewCustomers, &self.new_customers),
            (InputField::FixedCosts, &self.fixed_costs),
        ];
        for (field, raw) in flags {
            if let Some(raw) = raw {
                overrides.set(field, raw)?;
            }
        }

        Ok(overrides)
    }

    /// Layers the command-line overrides on top of the config file's.
    pub fn resolve(&self, config: &RunwayConfig) -> CliResult<InputOverrides> {
        Ok(config.overrides.merge(&self.to_overrides()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flags_win_over_assignments() {
        let args = OverrideArgs {
            cac: Some("0".to_string()),
            assignments: vec!["cac=150".to_string(), "lifetime=12".to_string()],
            ..Default::default()
        };
        let overrides = args.to_overrides().unwrap();
        assert_eq!(overrides.cac, Some(dec!(0)));
        assert_eq!(overrides.lifetime, Some(12));
    }

    #[test]
    fn test_cli_overrides_sit_above_config() {
        let config = RunwayConfig {
            overrides: InputOverrides::new().with_cac(dec!(100)).with_arpu(dec!(300)),
            ..Default::default()
        };
        let args = OverrideArgs {
            cac: Some("$120".to_string()),
            ..Default::default()
        };
        let merged = args.resolve(&config).unwrap();
        assert_eq!(merged.cac, Some(dec!(120)));
        assert_eq!(merged.arpu, Some(dec!(300)));
    }

    #[test]
    fn test_bad_assignment() {
        let args = OverrideArgs {
            assignments: vec!["churn=0.1".to_string()],
            ..Default::default()
        };
        assert!(args.to_overrides().is_err());
    }
}
