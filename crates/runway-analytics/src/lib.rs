//! # Runway Analytics
//!
//! The unit-economics metrics engine.
//!
//! Given an [`InputRecord`], [`compute`] derives nine metrics:
//!
//! ```text
//! monthly_revenue        = arpu * new_customers
//! monthly_gross_profit   = monthly_revenue * gross_margin
//! monthly_cac_spend      = cac * new_customers
//! monthly_burn           = fixed_costs + monthly_cac_spend
//! net_cash_flow          = monthly_gross_profit - monthly_burn
//! ltv                    = arpu * gross_margin * lifetime
//! ltv_cac_ratio          = ltv / cac                    (0 if cac == 0)
//! payback_period_months  = cac / (arpu * gross_margin)  (0 if arpu * gross_margin == 0)
//! ```
//!
//! The engine is a pure function: no I/O, no shared state, no rounding.
//!
//! # Modules
//!
//! - [`engine`]: [`compute`], [`compute_scenario`] and the [`MetricsEngine`] trait
//! - [`comparison`]: every preset computed side by side
//! - [`chart`]: the four-bar cash-flow series
//! - [`formatting`]: display helpers for renderers
//!
//! # Example
//!
//! ```rust
//! use runway_analytics::compute_scenario;
//! use runway_core::ScenarioName;
//! use runway_scenarios::InputOverrides;
//! use rust_decimal_macros::dec;
//!
//! let result = compute_scenario(ScenarioName::Base, &InputOverrides::new()).unwrap();
//! assert_eq!(result.net_cash_flow(), dec!(-50000));
//! assert_eq!(result.ltv_cac_ratio(), dec!(19.2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod chart;
pub mod comparison;
pub mod engine;
pub mod formatting;

pub use chart::{CashFlowBar, CashFlowBreakdown};
pub use comparison::{compare_scenarios, ScenarioOutcome};
pub use engine::{compute, compute_scenario, MetricsEngine, UnitEconomicsEngine};

pub use runway_core::{InputRecord, MetricsResult, RunwayError, RunwayResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chart::CashFlowBreakdown;
    pub use crate::comparison::{compare_scenarios, ScenarioOutcome};
    pub use crate::engine::{compute, compute_scenario, MetricsEngine, UnitEconomicsEngine};
    pub use runway_core::prelude::*;
    pub use runway_scenarios::{resolve, InputOverrides, ScenarioRegistry};
}
