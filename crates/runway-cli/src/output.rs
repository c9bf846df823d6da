//! Output formatting utilities.

use std::io;

use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use runway_analytics::formatting::{format_currency, format_metric};
use runway_analytics::CashFlowBreakdown;
use runway_core::Metric;

use crate::error::CliResult;

/// Prints rows as a rounded table with a left-aligned first column.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows as CSV with a header taken from the row type.
pub fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints raw CSV records.
pub fn print_csv_records<I, R>(records: I) -> CliResult<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for record in records {
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A metric row for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl From<&Metric> for MetricRow {
    fn from(metric: &Metric) -> Self {
        Self {
            metric: metric.label().to_string(),
            value: format_metric(metric),
        }
    }
}

/// Renders the four-bar cash-flow chart as text.
///
/// Bars are scaled so the largest magnitude spans `width` columns. When any
/// bar is negative, negative bars grow leftwards from a shared axis.
pub fn render_chart(chart: &CashFlowBreakdown, width: usize) -> String {
    let max = chart.max_magnitude();
    let negative_span = if chart.has_negative() { width } else { 0 };
    let label_width = chart
        .bars()
        .iter()
        .map(|bar| bar.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for bar in chart.bars() {
        let len = scaled_length(bar.value.abs(), max, width);
        let (left, right) = if bar.value < Decimal::ZERO {
            (
                format!("{}{}", " ".repeat(negative_span - len), "█".repeat(len)),
                String::new(),
            )
        } else {
            (" ".repeat(negative_span), "█".repeat(len))
        };
        let line = format!(
            "{:<label_width$}  {}│{}{}  {}",
            bar.label,
            left,
            right,
            " ".repeat(width - len.min(width)),
            format_currency(bar.value),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn scaled_length(magnitude: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    (magnitude / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_analytics::compute;
    use runway_core::InputRecord;
    use rust_decimal_macros::dec;

    fn chart_for(input: &InputRecord) -> CashFlowBreakdown {
        CashFlowBreakdown::from_result(&compute(input).unwrap())
    }

    #[test]
    fn test_metric_row_formatting() {
        let row = MetricRow::from(&Metric::new(
            runway_core::MetricKind::LtvCacRatio,
            dec!(19.2),
        ));
        assert_eq!(row.metric, "LTV:CAC Ratio");
        assert_eq!(row.value, "19.20x");
    }

    #[test]
    fn test_scaled_length() {
        assert_eq!(scaled_length(dec!(50000), dec!(50000), 40), 40);
        assert_eq!(scaled_length(dec!(25000), dec!(50000), 40), 20);
        assert_eq!(scaled_length(dec!(0), dec!(50000), 40), 0);
        assert_eq!(scaled_length(dec!(10), dec!(0), 40), 0);
    }

    #[test]
    fn test_render_chart_with_negative_bar() {
        let chart = chart_for(&runway_scenarios::BASE);
        let text = render_chart(&chart, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        assert!(lines[0].starts_with("Gross Profit"));
        assert!(lines[0].ends_with("$40,000"));
        assert!(lines[0].contains(&format!("│{}", "█".repeat(8))));

        // Net cash flow: full-width bar left of the axis.
        assert!(lines[3].contains(&format!("{}│", "█".repeat(10))));
        assert!(lines[3].ends_with("-$50,000"));
    }

    #[test]
    fn test_render_chart_all_positive_has_no_left_margin() {
        let input =
            InputRecord::new(dec!(500), dec!(0.9), 36, dec!(50), 100, dec!(10000)).unwrap();
        let text = render_chart(&chart_for(&input), 20);
        for line in text.lines() {
            let axis = line.find('│').unwrap();
            let label_part = &line[..axis];
            assert!(!label_part.contains('█'));
        }
    }
}
