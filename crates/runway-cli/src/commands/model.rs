//! Model command implementation.
//!
//! Computes the nine unit-economics metrics for one scenario.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use runway_analytics::formatting::{format_currency, format_metric};
use runway_analytics::{compute_scenario, CashFlowBreakdown};
use runway_core::{DisplayHint, InputRecord, Metric, MetricsResult, ScenarioName};
use runway_scenarios::InputOverrides;

use crate::cli::OutputFormat;
use crate::commands::{Context, OverrideArgs};
use crate::output::{
    print_csv, print_header, print_info, print_json, print_table, print_warning, render_chart,
    MetricRow,
};

/// Arguments for the model command.
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Scenario preset: "Base", "Best Case" or "Worst Case" [default: from config, else Base]
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Skip the cash-flow chart
    #[arg(long)]
    pub no_chart: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// One metric in JSON and CSV output.
#[derive(Debug, Serialize)]
pub struct MetricEntry {
    /// Display label.
    pub metric: &'static str,
    /// Unrounded value.
    pub value: Decimal,
    /// How the value is rendered.
    pub hint: DisplayHint,
    /// Rendered value, as shown in the table.
    pub formatted: String,
}

impl From<&Metric> for MetricEntry {
    fn from(metric: &Metric) -> Self {
        Self {
            metric: metric.label(),
            value: metric.value,
            hint: metric.hint,
            formatted: format_metric(metric),
        }
    }
}

#[derive(Serialize)]
struct ModelReport<'a> {
    scenario: ScenarioName,
    overrides: &'a InputOverrides,
    input: &'a InputRecord,
    metrics: Vec<MetricEntry>,
    chart: CashFlowBreakdown,
}

/// Execute the model command.
pub fn execute(args: ModelArgs, ctx: &Context) -> Result<()> {
    let scenario = match args.scenario.as_deref() {
        Some(name) => name.parse::<ScenarioName>()?,
        None => ctx.config.model.scenario,
    };
    let overrides = args.overrides.resolve(&ctx.config)?;

    let result = compute_scenario(scenario, &overrides)?;
    tracing::debug!(%scenario, net_cash_flow = %result.net_cash_flow(), "model computed");

    match ctx.format {
        OutputFormat::Json => {
            let report = ModelReport {
                scenario,
                overrides: &overrides,
                input: result.input(),
                metrics: result.metrics().iter().map(MetricEntry::from).collect(),
                chart: CashFlowBreakdown::from_result(&result),
            };
            print_json(&report)?;
        }
        OutputFormat::Csv => {
            let entries: Vec<MetricEntry> =
                result.metrics().iter().map(MetricEntry::from).collect();
            print_csv(&entries)?;
        }
        OutputFormat::Minimal => {
            println!("{}", result.net_cash_flow());
        }
        OutputFormat::Table => {
            let show_chart = ctx.config.display.show_chart && !args.no_chart && !ctx.quiet;
            print_model_table(scenario, &overrides, &result, ctx.quiet);
            if show_chart {
                print_chart(&result, ctx.config.display.chart_width);
            }
        }
    }

    Ok(())
}

fn print_model_table(
    scenario: ScenarioName,
    overrides: &InputOverrides,
    result: &MetricsResult,
    quiet: bool,
) {
    print_header(&format!("{} Scenario", scenario));

    if !quiet && !overrides.is_empty() {
        let fields: Vec<&str> = overrides
            .overridden_fields()
            .into_iter()
            .map(|field| field.key())
            .collect();
        print_info(&format!("Overridden inputs: {}", fields.join(", ")));
    }

    let rows: Vec<MetricRow> = result.metrics().iter().map(MetricRow::from).collect();
    print_table(&rows);

    if !quiet && result.net_cash_flow() < Decimal::ZERO {
        print_warning(&format!(
            "Burning {} per month",
            format_currency(-result.net_cash_flow())
        ));
    }
}

fn print_chart(result: &MetricsResult, width: usize) {
    let chart = CashFlowBreakdown::from_result(result);
    print_header(CashFlowBreakdown::TITLE);
    println!("{}", CashFlowBreakdown::Y_LABEL.dimmed());
    print!("{}", render_chart(&chart, width));
}
