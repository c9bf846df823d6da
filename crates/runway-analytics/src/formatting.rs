//! Display formatting for metric values.
//!
//! The engine returns full-precision values; rounding happens only here, at
//! the presentation edge.

use rust_decimal::{Decimal, RoundingStrategy};

use runway_core::{DisplayHint, Metric};

/// Format a money amount: `$` prefix, thousands separators, no decimals.
///
/// Negative amounts put the sign before the symbol (`-$50,000`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round(amount, 0);
    let digits = add_thousands_separator(&format!("{}", rounded.abs()));
    if rounded < Decimal::ZERO {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Format a ratio with two decimals and an `x` suffix.
pub fn format_ratio(ratio: Decimal) -> String {
    format!("{:.2}x", round(ratio, 2))
}

/// Format a period count with two decimals.
pub fn format_count(count: Decimal) -> String {
    format!("{:.2}", round(count, 2))
}

/// Format a fraction as a percentage, dropping trailing zeros (`0.80` -> `80%`).
pub fn format_percent(fraction: Decimal) -> String {
    format!("{}%", round(fraction * Decimal::ONE_HUNDRED, 2).normalize())
}

/// Format a metric according to its display hint.
pub fn format_metric(metric: &Metric) -> String {
    format_value(metric.value, metric.hint)
}

/// Format a raw value according to a display hint.
pub fn format_value(value: Decimal, hint: DisplayHint) -> String {
    match hint {
        DisplayHint::Currency => format_currency(value),
        DisplayHint::Ratio => format_ratio(value),
        DisplayHint::Count => format_count(value),
    }
}

/// Rounds half-to-even and folds negative zero into zero.
fn round(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        Decimal::ZERO.round_dp(dp)
    } else {
        rounded
    }
}

/// Add thousands separators to a number string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let formatted: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{}.{}", formatted, dec),
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_core::MetricKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(50000)), "$50,000");
        assert_eq!(format_currency(dec!(40000.00)), "$40,000");
        assert_eq!(format_currency(dec!(1132016.6)), "$1,132,017");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(dec!(-50000)), "-$50,000");
        assert_eq!(format_currency(dec!(-25250)), "-$25,250");
        assert_eq!(format_currency(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(dec!(19.2)), "19.20x");
        assert_eq!(format_ratio(dec!(35.416666666666666666666666667)), "35.42x");
        assert_eq!(format_ratio(Decimal::ZERO), "0.00x");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(dec!(1.25)), "1.25");
        assert_eq!(format_count(dec!(0.8470588235294117647058823529)), "0.85");
        assert_eq!(format_count(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(0.80)), "80%");
        assert_eq!(format_percent(dec!(0.8125)), "81.25%");
        assert_eq!(format_percent(dec!(0)), "0%");
    }

    #[test]
    fn test_format_metric_dispatch() {
        let ratio = Metric::new(MetricKind::LtvCacRatio, dec!(7.56));
        let payback = Metric::new(MetricKind::PaybackPeriodMonths, dec!(2.380952));
        let burn = Metric::new(MetricKind::MonthlyBurn, dec!(82500));
        assert_eq!(format_metric(&ratio), "7.56x");
        assert_eq!(format_metric(&payback), "2.38");
        assert_eq!(format_metric(&burn), "$82,500");
    }

    #[test]
    fn test_add_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567.89"), "1,234,567.89");
        assert_eq!(add_thousands_separator("100"), "100");
        assert_eq!(add_thousands_separator("1000"), "1,000");
    }
}
