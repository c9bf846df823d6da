//! Cash-flow chart series.
//!
//! The renderer draws four bars: Gross Profit, CAC Spend, Fixed Costs and
//! Net Cash Flow. The values are the engine's own, unrounded.

use rust_decimal::Decimal;
use serde::Serialize;

use runway_core::{MetricKind, MetricsResult};

/// One bar of the cash-flow chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashFlowBar {
    /// Bar label.
    pub label: &'static str,
    /// The metric the bar is drawn from.
    pub metric: MetricKind,
    /// Bar height; negative for a net outflow.
    pub value: Decimal,
}

/// The four-bar monthly cash-flow breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashFlowBreakdown {
    bars: [CashFlowBar; 4],
}

impl CashFlowBreakdown {
    /// Chart title.
    pub const TITLE: &'static str = "Cash Flow by Component";

    /// Y-axis label.
    pub const Y_LABEL: &'static str = "Monthly $ Amount";

    /// Builds the series from an engine result.
    pub fn from_result(result: &MetricsResult) -> Self {
        let bar = |label: &'static str, metric: MetricKind| CashFlowBar {
            label,
            metric,
            value: result.value(metric),
        };
        Self {
            bars: [
                bar("Gross Profit", MetricKind::MonthlyGrossProfit),
                bar("CAC Spend", MetricKind::CacSpend),
                bar("Fixed Costs", MetricKind::FixedCosts),
                bar("Net Cash Flow", MetricKind::NetCashFlow),
            ],
        }
    }

    /// The bars in drawing order.
    pub fn bars(&self) -> &[CashFlowBar; 4] {
        &self.bars
    }

    /// Largest absolute bar value; the renderer scales against this.
    pub fn max_magnitude(&self) -> Decimal {
        self.bars
            .iter()
            .map(|bar| bar.value.abs())
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns true if any bar is below zero.
    pub fn has_negative(&self) -> bool {
        self.bars.iter().any(|bar| bar.value < Decimal::ZERO)
    }
}

impl From<&MetricsResult> for CashFlowBreakdown {
    fn from(result: &MetricsResult) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use runway_scenarios::BASE;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_uses_engine_values() {
        let result = compute(&BASE).unwrap();
        let chart = CashFlowBreakdown::from_result(&result);
        let values: Vec<_> = chart.bars().iter().map(|b| (b.label, b.value)).collect();
        assert_eq!(
            values,
            vec![
                ("Gross Profit", dec!(40000)),
                ("CAC Spend", dec!(50000)),
                ("Fixed Costs", dec!(40000)),
                ("Net Cash Flow", dec!(-50000)),
            ]
        );
    }

    #[test]
    fn test_magnitude_and_sign() {
        let result = compute(&BASE).unwrap();
        let chart = CashFlowBreakdown::from(&result);
        assert_eq!(chart.max_magnitude(), dec!(50000));
        assert!(chart.has_negative());
    }
}
