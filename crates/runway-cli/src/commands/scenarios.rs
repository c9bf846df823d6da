//! Scenarios command implementation.
//!
//! Lists the built-in presets.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

use runway_analytics::formatting::{format_currency, format_percent};
use runway_core::{InputField, InputRecord, ScenarioName};
use runway_scenarios::ScenarioRegistry;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_csv_records, print_header, print_json};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {}

#[derive(Serialize)]
struct PresetEntry {
    scenario: ScenarioName,
    name: &'static str,
    input: InputRecord,
}

/// Execute the scenarios command.
pub fn execute(_args: ScenariosArgs, ctx: &Context) -> Result<()> {
    let presets: Vec<(ScenarioName, InputRecord)> =
        ScenarioRegistry::global().scenarios().collect();

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<PresetEntry> = presets
                .iter()
                .map(|&(scenario, input)| PresetEntry {
                    scenario,
                    name: scenario.display_name(),
                    input,
                })
                .collect();
            print_json(&entries)?;
        }
        OutputFormat::Csv => {
            let header = std::iter::once("scenario")
                .chain(InputField::ALL.iter().map(|field| field.key()))
                .map(str::to_string)
                .collect::<Vec<_>>();
            let rows = presets.iter().map(|(scenario, input)| {
                std::iter::once(scenario.key().to_string())
                    .chain(InputField::ALL.iter().map(|&field| input.get(field).to_string()))
                    .collect::<Vec<_>>()
            });
            print_csv_records(std::iter::once(header).chain(rows))?;
        }
        OutputFormat::Minimal => {
            for (scenario, _) in &presets {
                println!("{}", scenario.display_name());
            }
        }
        OutputFormat::Table => {
            print_header("Scenario Presets");
            println!("{}", presets_table(&presets));
        }
    }

    Ok(())
}

fn format_input(input: &InputRecord, field: InputField) -> String {
    let value = input.get(field);
    match field {
        InputField::GrossMargin => format_percent(value),
        _ if field.is_monetary() => format_currency(value),
        _ => value.to_string(),
    }
}

fn presets_table(presets: &[(ScenarioName, InputRecord)]) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Input".to_string()];
    header.extend(presets.iter().map(|(scenario, _)| scenario.display_name().to_string()));
    builder.push_record(header);

    for field in InputField::ALL {
        let mut row = vec![field.label().to_string()];
        row.extend(presets.iter().map(|(_, input)| format_input(input, field)));
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
    use runway_scenarios::BASE;

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(&BASE, InputField::Arpu), "$200");
        assert_eq!(format_input(&BASE, InputField::GrossMargin), "80%");
        assert_eq!(format_input(&BASE, InputField::Lifetime), "24");
        assert_eq!(format_input(&BASE, InputField::FixedCosts), "$40,000");
    }

    #[test]
    fn test_presets_table() {
        let presets: Vec<_> = ScenarioRegistry::global().scenarios().collect();
        let table = presets_table(&presets);
        assert!(table.contains("Best Case"));
        assert!(table.contains("$35,000"));
        assert!(table.contains("70%"));
    }
}
