//! Compare command implementation.
//!
//! Computes every scenario preset with the same overrides applied.

use anyhow::Result;
use clap::Args;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

use runway_analytics::formatting::format_metric;
use runway_analytics::{compare_scenarios, ScenarioOutcome};
use runway_core::{Metric, MetricKind};

use crate::cli::OutputFormat;
use crate::commands::{Context, OverrideArgs};
use crate::output::{print_csv_records, print_header, print_info, print_json};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, ctx: &Context) -> Result<()> {
    let overrides = args.overrides.resolve(&ctx.config)?;
    let outcomes = compare_scenarios(&overrides)?;

    match ctx.format {
        OutputFormat::Json => print_json(&outcomes)?,
        OutputFormat::Csv => {
            let header = std::iter::once("Metric".to_string()).chain(
                outcomes
                    .iter()
                    .map(|outcome| outcome.scenario.display_name().to_string()),
            );
            let rows = MetricKind::ALL.iter().map(|&kind| {
                std::iter::once(kind.label().to_string())
                    .chain(
                        outcomes
                            .iter()
                            .map(|outcome| outcome.result.value(kind).to_string()),
                    )
                    .collect::<Vec<_>>()
            });
            print_csv_records(std::iter::once(header.collect::<Vec<_>>()).chain(rows))?;
        }
        OutputFormat::Minimal => {
            for outcome in &outcomes {
                println!(
                    "{}: {}",
                    outcome.scenario.display_name(),
                    outcome.result.net_cash_flow()
                );
            }
        }
        OutputFormat::Table => {
            print_header("Scenario Comparison");
            if !ctx.quiet && !overrides.is_empty() {
                let fields: Vec<&str> = overrides
                    .overridden_fields()
                    .into_iter()
                    .map(|field| field.key())
                    .collect();
                print_info(&format!("Overridden inputs (all scenarios): {}", fields.join(", ")));
            }
            println!("{}", comparison_table(&outcomes));
        }
    }

    Ok(())
}

/// Builds the metric-by-scenario table.
fn comparison_table(outcomes: &[ScenarioOutcome]) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Metric".to_string()];
    header.extend(
        outcomes
            .iter()
            .map(|outcome| outcome.scenario.display_name().to_string()),
    );
    builder.push_record(header);

    for kind in MetricKind::ALL {
        let mut row = vec![kind.label().to_string()];
        row.extend(
            outcomes
                .iter()
                .map(|outcome| format_metric(&Metric::new(kind, outcome.result.value(kind)))),
        );
        builder.push_record(row);
    }

    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_scenarios::InputOverrides;

    #[test]
    fn test_comparison_table_layout() {
        let outcomes = compare_scenarios(&InputOverrides::new()).unwrap();
        let table = comparison_table(&outcomes);

        let header = table.lines().nth(1).unwrap();
        let base = header.find("Base").unwrap();
        let best = header.find("Best Case").unwrap();
        let worst = header.find("Worst Case").unwrap();
        assert!(base < best && best < worst);

        assert!(table.contains("Net Cash Flow"));
        assert!(table.contains("-$50,000"));
        assert!(table.contains("-$66,750"));
    }
}
