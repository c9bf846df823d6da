//! # Runway Core
//!
//! Core types and error taxonomy for the Runway SaaS unit-economics engine.
//!
//! This crate provides the value types shared by every other Runway crate:
//!
//! - **Inputs**: [`InputRecord`], the six validated business inputs, and
//!   [`InputField`] for addressing a single field
//! - **Scenarios**: [`ScenarioName`], the closed set of named presets
//! - **Outputs**: [`MetricsResult`], the nine derived metrics with display hints
//! - **Errors**: [`RunwayError`], `InvalidScenario` and `InvalidInput`
//!
//! ## Design Philosophy
//!
//! - **Validate at construction**: an `InputRecord` that exists is in-domain
//! - **Exact arithmetic**: money and margins are `Decimal`, never `f64`
//! - **No hidden state**: every type here is an immutable value
//!
//! ## Example
//!
//! ```rust
//! use runway_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let input = InputRecord::new(dec!(200), dec!(0.80), 24, dec!(200), 250, dec!(40000)).unwrap();
//! assert_eq!(input.arpu(), dec!(200));
//!
//! let bad = InputRecord::new(dec!(200), dec!(1.5), 24, dec!(200), 250, dec!(40000));
//! assert!(matches!(bad, Err(RunwayError::InvalidInput { .. })));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RunwayError, RunwayResult};
    pub use crate::types::{
        DerivedValues, DisplayHint, InputField, InputRecord, InputRecordBuilder, Metric,
        MetricKind, MetricsResult, ScenarioName, MAX_AMOUNT,
    };
}

// Re-export commonly used types at crate root
pub use error::{RunwayError, RunwayResult};
pub use types::{
    DerivedValues, DisplayHint, InputField, InputRecord, Metric, MetricKind, MetricsResult,
    ScenarioName, MAX_AMOUNT,
};
