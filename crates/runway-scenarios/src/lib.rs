//! # Runway Scenarios
//!
//! The scenario preset registry and the override layer that sits between a
//! preset and the metrics engine.
//!
//! - [`ScenarioRegistry`]: read-only table mapping each [`ScenarioName`] to a
//!   complete [`InputRecord`]
//! - [`InputOverrides`]: per-field replacements applied on top of a preset
//!
//! # Example
//!
//! ```rust
//! use runway_scenarios::{resolve, InputOverrides};
//! use runway_core::ScenarioName;
//! use rust_decimal_macros::dec;
//!
//! let base = resolve(ScenarioName::Base);
//! assert_eq!(base.arpu(), dec!(200));
//!
//! let overrides = InputOverrides::new().with_cac(dec!(0));
//! let input = overrides.apply(&base).unwrap();
//! assert_eq!(input.cac(), dec!(0));
//! assert_eq!(input.arpu(), base.arpu());
//! ```
//!
//! # Presets
//!
//! | Scenario | ARPU | Gross Margin | Lifetime | CAC | New Customers | Fixed Costs |
//! |---|---|---|---|---|---|---|
//! | Base | 200 | 0.80 | 24 | 200 | 250 | 40000 |
//! | Best Case | 250 | 0.85 | 30 | 180 | 300 | 35000 |
//! | Worst Case | 150 | 0.70 | 18 | 250 | 150 | 45000 |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod overrides;
mod registry;

pub use overrides::InputOverrides;
pub use registry::{resolve, resolve_named, ScenarioRegistry, BASE, BEST_CASE, WORST_CASE};

pub use runway_core::{InputRecord, ScenarioName};
