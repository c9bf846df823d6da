//! Metrics engine.

use rust_decimal::Decimal;

use runway_core::{
    DerivedValues, InputField, InputRecord, MetricsResult, RunwayError, RunwayResult,
    ScenarioName,
};
use runway_scenarios::{resolve, InputOverrides};

/// Trait for engines that turn an input record into metrics.
///
/// Implementations must be pure: the same input always yields the same
/// result.
pub trait MetricsEngine: Send + Sync {
    /// Computes the metrics for `input`.
    fn compute(&self, input: &InputRecord) -> RunwayResult<MetricsResult>;

    /// Resolves a preset, applies `overrides`, and computes.
    fn compute_scenario(
        &self,
        scenario: ScenarioName,
        overrides: &InputOverrides,
    ) -> RunwayResult<MetricsResult> {
        let input = overrides.apply(&resolve(scenario))?;
        tracing::debug!(%scenario, "computing scenario");
        self.compute(&input)
    }
}

/// The standard unit-economics engine. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitEconomicsEngine;

impl UnitEconomicsEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl MetricsEngine for UnitEconomicsEngine {
    fn compute(&self, input: &InputRecord) -> RunwayResult<MetricsResult> {
        compute(input)
    }
}

/// Computes the nine unit-economics metrics for `input`.
///
/// Division by zero is not an error: a zero CAC gives an LTV:CAC ratio of 0,
/// and a zero ARPU or gross margin gives a payback period of 0.
///
/// Products cannot overflow for amounts up to `MAX_AMOUNT`. The quotients
/// can, when a non-zero divisor is vanishingly small (CAC, or ARPU x gross
/// margin, below about 1e-8); those fail with `InvalidInput` on the divisor.
///
/// # Example
///
/// ```rust
/// use runway_analytics::compute;
/// use runway_core::InputRecord;
/// use rust_decimal_macros::dec;
///
/// let input = InputRecord::new(dec!(250), dec!(0.85), 30, dec!(180), 300, dec!(35000)).unwrap();
/// let result = compute(&input).unwrap();
/// assert_eq!(result.monthly_gross_profit(), dec!(63750));
/// assert_eq!(result.payback_period_months().round_dp(4), dec!(0.8471));
/// ```
pub fn compute(input: &InputRecord) -> RunwayResult<MetricsResult> {
    let new_customers = Decimal::from(input.new_customers());

    let monthly_revenue = input.arpu() * new_customers;
    let monthly_gross_profit = monthly_revenue * input.gross_margin();
    let monthly_cac_spend = input.cac() * new_customers;
    let monthly_burn = input.fixed_costs() + monthly_cac_spend;
    let net_cash_flow = monthly_gross_profit - monthly_burn;

    let unit_gross_profit = input.arpu() * input.gross_margin();
    let ltv = unit_gross_profit * Decimal::from(input.lifetime());

    let ltv_cac_ratio = if input.cac().is_zero() {
        Decimal::ZERO
    } else {
        ltv.checked_div(input.cac()).ok_or_else(|| {
            RunwayError::invalid_input(
                InputField::Cac,
                format!("{} is too small to divide LTV {} by", input.cac(), ltv),
            )
        })?
    };

    // A non-zero product can still round to zero, which checked_div rejects.
    let payback_period_months = if input.arpu().is_zero() || input.gross_margin().is_zero() {
        Decimal::ZERO
    } else {
        input.cac().checked_div(unit_gross_profit).ok_or_else(|| {
            RunwayError::invalid_input(
                InputField::GrossMargin,
                format!(
                    "ARPU x gross margin ({}) is too small to divide CAC {} by",
                    unit_gross_profit,
                    input.cac()
                ),
            )
        })?
    };

    tracing::debug!(
        %monthly_revenue,
        %net_cash_flow,
        %ltv_cac_ratio,
        "computed unit economics"
    );

    Ok(MetricsResult::new(
        *input,
        DerivedValues {
            monthly_revenue,
            monthly_gross_profit,
            monthly_cac_spend,
            monthly_burn,
            net_cash_flow,
            ltv,
            ltv_cac_ratio,
            payback_period_months,
        },
    ))
}

/// Resolves `scenario`, applies `overrides`, and computes.
pub fn compute_scenario(
    scenario: ScenarioName,
    overrides: &InputOverrides,
) -> RunwayResult<MetricsResult> {
    UnitEconomicsEngine.compute_scenario(scenario, overrides)
}
