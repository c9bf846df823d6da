//! Derived metric types.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::InputRecord;

/// How a metric value should be presented.
///
/// The engine never rounds; this only tells a renderer which format to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    /// Money amount.
    Currency,
    /// Dimensionless multiple, e.g. LTV:CAC.
    Ratio,
    /// Number of periods.
    Count,
}

/// Identifies one of the nine output metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// ARPU x new customers.
    MonthlyRevenue,
    /// Revenue x gross margin.
    MonthlyGrossProfit,
    /// CAC x new customers.
    CacSpend,
    /// Fixed overhead, passed through from the input.
    FixedCosts,
    /// Fixed costs + CAC spend.
    MonthlyBurn,
    /// Gross profit - burn. May be negative.
    NetCashFlow,
    /// ARPU x gross margin x lifetime.
    Ltv,
    /// LTV / CAC, or 0 when CAC is 0.
    LtvCacRatio,
    /// CAC / (ARPU x gross margin), or 0 when the denominator is 0.
    PaybackPeriodMonths,
}

impl MetricKind {
    /// The fixed output order.
    pub const ALL: [MetricKind; 9] = [
        MetricKind::MonthlyRevenue,
        MetricKind::MonthlyGrossProfit,
        MetricKind::CacSpend,
        MetricKind::FixedCosts,
        MetricKind::MonthlyBurn,
        MetricKind::NetCashFlow,
        MetricKind::Ltv,
        MetricKind::LtvCacRatio,
        MetricKind::PaybackPeriodMonths,
    ];

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::MonthlyRevenue => "Monthly Revenue",
            MetricKind::MonthlyGrossProfit => "Monthly Gross Profit",
            MetricKind::CacSpend => "CAC Spend",
            MetricKind::FixedCosts => "Fixed Costs",
            MetricKind::MonthlyBurn => "Monthly Burn",
            MetricKind::NetCashFlow => "Net Cash Flow",
            MetricKind::Ltv => "Customer Lifetime Value (LTV)",
            MetricKind::LtvCacRatio => "LTV:CAC Ratio",
            MetricKind::PaybackPeriodMonths => "Payback Period (Months)",
        }
    }

    /// Returns the formatting hint for this metric.
    #[must_use]
    pub fn hint(self) -> DisplayHint {
        match self {
            MetricKind::LtvCacRatio => DisplayHint::Ratio,
            MetricKind::PaybackPeriodMonths => DisplayHint::Count,
            _ => DisplayHint::Currency,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One named metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Which metric this is.
    pub kind: MetricKind,
    /// Full-precision value.
    pub value: Decimal,
    /// Formatting hint.
    pub hint: DisplayHint,
}

impl Metric {
    /// Creates a metric, taking the hint from the kind.
    #[must_use]
    pub fn new(kind: MetricKind, value: Decimal) -> Self {
        Self {
            kind,
            value,
            hint: kind.hint(),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The eight values the engine derives from an input record.
///
/// Fixed costs are not repeated here; they come straight from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    /// ARPU x new customers.
    pub monthly_revenue: Decimal,
    /// Revenue x gross margin.
    pub monthly_gross_profit: Decimal,
    /// CAC x new customers.
    pub monthly_cac_spend: Decimal,
    /// Fixed costs + CAC spend.
    pub monthly_burn: Decimal,
    /// Gross profit - burn.
    pub net_cash_flow: Decimal,
    /// Customer lifetime value.
    pub ltv: Decimal,
    /// LTV / CAC.
    pub ltv_cac_ratio: Decimal,
    /// Months to recover CAC.
    pub payback_period_months: Decimal,
}

/// Output of one engine invocation.
///
/// Carries the input it was computed from; two results are equal exactly
/// when their inputs and every derived value are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsResult {
    input: InputRecord,
    #[serde(flatten)]
    values: DerivedValues,
}

impl MetricsResult {
    /// Pairs derived values with the input that produced them.
    ///
    /// Engine-internal. Results come from `runway_analytics::compute`.
    #[doc(hidden)]
    #[must_use]
    pub fn new(input: InputRecord, values: DerivedValues) -> Self {
        Self { input, values }
    }

    /// The input record these metrics were computed from.
    pub fn input(&self) -> &InputRecord {
        &self.input
    }

    /// The derived values.
    pub fn values(&self) -> &DerivedValues {
        &self.values
    }

    /// Monthly revenue.
    pub fn monthly_revenue(&self) -> Decimal {
        self.values.monthly_revenue
    }

    /// Monthly gross profit.
    pub fn monthly_gross_profit(&self) -> Decimal {
        self.values.monthly_gross_profit
    }

    /// Monthly CAC spend.
    pub fn monthly_cac_spend(&self) -> Decimal {
        self.values.monthly_cac_spend
    }

    /// Fixed costs (from the input).
    pub fn fixed_costs(&self) -> Decimal {
        self.input.fixed_costs()
    }

    /// Monthly burn.
    pub fn monthly_burn(&self) -> Decimal {
        self.values.monthly_burn
    }

    /// Net cash flow; negative when burn exceeds gross profit.
    pub fn net_cash_flow(&self) -> Decimal {
        self.values.net_cash_flow
    }

    /// Customer lifetime value.
    pub fn ltv(&self) -> Decimal {
        self.values.ltv
    }

    /// LTV:CAC ratio.
    pub fn ltv_cac_ratio(&self) -> Decimal {
        self.values.ltv_cac_ratio
    }

    /// Payback period in months.
    pub fn payback_period_months(&self) -> Decimal {
        self.values.payback_period_months
    }

    /// Returns the value for one metric.
    pub fn value(&self, kind: MetricKind) -> Decimal {
        match kind {
            MetricKind::MonthlyRevenue => self.monthly_revenue(),
            MetricKind::MonthlyGrossProfit => self.monthly_gross_profit(),
            MetricKind::CacSpend => self.monthly_cac_spend(),
            MetricKind::FixedCosts => self.fixed_costs(),
            MetricKind::MonthlyBurn => self.monthly_burn(),
            MetricKind::NetCashFlow => self.net_cash_flow(),
            MetricKind::Ltv => self.ltv(),
            MetricKind::LtvCacRatio => self.ltv_cac_ratio(),
            MetricKind::PaybackPeriodMonths => self.payback_period_months(),
        }
    }

    /// All nine metrics in the fixed output order.
    pub fn metrics(&self) -> [Metric; 9] {
        MetricKind::ALL.map(|kind| Metric::new(kind, self.value(kind)))
    }

    /// Returns true if the business is cash-flow positive this period.
    pub fn is_cash_flow_positive(&self) -> bool {
        self.values.net_cash_flow > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> MetricsResult {
        let input =
            InputRecord::new(dec!(200), dec!(0.80), 24, dec!(200), 250, dec!(40000)).unwrap();
        MetricsResult::new(
            input,
            DerivedValues {
                monthly_revenue: dec!(50000),
                monthly_gross_profit: dec!(40000),
                monthly_cac_spend: dec!(50000),
                monthly_burn: dec!(90000),
                net_cash_flow: dec!(-50000),
                ltv: dec!(3840),
                ltv_cac_ratio: dec!(19.2),
                payback_period_months: dec!(1.25),
            },
        )
    }

    #[test]
    fn test_metric_order_and_labels() {
        let labels: Vec<_> = sample().metrics().iter().map(Metric::label).collect();
        assert_eq!(
            labels,
            vec![
                "Monthly Revenue",
                "Monthly Gross Profit",
                "CAC Spend",
                "Fixed Costs",
                "Monthly Burn",
                "Net Cash Flow",
                "Customer Lifetime Value (LTV)",
                "LTV:CAC Ratio",
                "Payback Period (Months)",
            ]
        );
    }

    #[test]
    fn test_hints() {
        let metrics = sample().metrics();
        assert!(metrics[..7].iter().all(|m| m.hint == DisplayHint::Currency));
        assert_eq!(metrics[7].hint, DisplayHint::Ratio);
        assert_eq!(metrics[8].hint, DisplayHint::Count);
    }

    #[test]
    fn test_fixed_costs_pass_through() {
        let result = sample();
        assert_eq!(result.value(MetricKind::FixedCosts), dec!(40000));
        assert_eq!(result.metrics()[3].value, dec!(40000));
    }

    #[test]
    fn test_cash_flow_sign() {
        assert!(!sample().is_cash_flow_positive());
    }

    #[test]
    fn test_serialize_flattens_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["net_cash_flow"], "-50000");
        assert_eq!(json["input"]["lifetime"], 24);
        assert_eq!(json["ltv_cac_ratio"], "19.2");
    }
}
