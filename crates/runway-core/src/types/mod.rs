//! Domain types for the Runway engine.
//!
//! This module provides the value types used throughout Runway:
//!
//! - [`InputRecord`]: the six validated business inputs
//! - [`InputField`]: addresses one input field
//! - [`ScenarioName`]: the closed set of scenario presets
//! - [`MetricsResult`]: the nine derived metrics
//! - [`Metric`], [`MetricKind`], [`DisplayHint`]: one metric with its formatting hint

mod input;
mod metrics;
mod scenario;

pub use input::{InputField, InputRecord, InputRecordBuilder, MAX_AMOUNT};
pub use metrics::{DerivedValues, DisplayHint, Metric, MetricKind, MetricsResult};
pub use scenario::ScenarioName;
