//! Output formatting utilities.

use colored::Colorize;
use dcf_core::{ValuationInput, ValuationResult};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::report::step_report;

/// One forecast period, for tables and CSV.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PeriodRow {
    #[tabled(rename = "Year")]
    pub year: u32,
    #[tabled(rename = "Projected FCF", display_with = "fixed4")]
    pub projected_fcf: f64,
    #[tabled(rename = "(1 + r)^t", display_with = "fixed6")]
    pub discount_factor: f64,
    #[tabled(rename = "Present Value", display_with = "fixed4")]
    pub present_value: f64,
}

fn fixed4(value: &f64) -> String {
    format!("{value:.4}")
}

fn fixed6(value: &f64) -> String {
    format!("{value:.6}")
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a number with fixed precision.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{value:.precision$}"))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value_pct: f64) -> Self {
        Self::new(key, format!("{value_pct:.2}%"))
    }
}

/// Input and result together, as emitted by the JSON format.
#[derive(Debug, Serialize)]
pub struct ValuationOutput<'a> {
    pub input: &'a ValuationInput,
    pub result: &'a ValuationResult,
}

/// Builds the per-period rows of a result.
pub fn period_rows(result: &ValuationResult) -> Vec<PeriodRow> {
    result
        .periods()
        .map(|p| PeriodRow {
            year: p.period,
            projected_fcf: p.projected,
            discount_factor: p.discount_factor,
            present_value: p.discounted,
        })
        .collect()
}

/// Builds the summary metrics of a result.
pub fn summary_rows(input: &ValuationInput, result: &ValuationResult) -> Vec<KeyValue> {
    vec![
        KeyValue::from_f64("Next-period FCF", input.fcf_base, 4),
        KeyValue::from_f64("Total Shares", input.total_shares, 4),
        KeyValue::from_percent("Discount Rate (r)", input.discount_rate_pct),
        KeyValue::from_percent("Growth Rate (g)", input.avg_growth_rate_pct),
        KeyValue::from_percent("Perpetual Growth (gp)", input.perpetual_growth_pct),
        KeyValue::new("Forecast Years (N)", input.years.to_string()),
        KeyValue::from_f64("Sum of PV", result.sum_discounted_fcf(), 4),
        KeyValue::from_f64("Terminal Value", result.terminal_value(), 4),
        KeyValue::from_f64("PV of Terminal Value", result.discounted_terminal(), 4),
        KeyValue::from_f64("Firm Value", result.firm_value(), 4),
        KeyValue::from_f64("Value per Share", result.per_share_value(), 6),
    ]
}

/// Prints a valuation in the requested format.
pub fn print_valuation(
    input: &ValuationInput,
    result: &ValuationResult,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Report => {
            println!();
            print!("{}", step_report(input, result));
        }
        OutputFormat::Table => {
            print_header("Projected Cash Flows");
            print_table(&period_rows(result));
            print_header("Valuation Summary");
            print_table(&summary_rows(input, result));
        }
        OutputFormat::Json => {
            let output = ValuationOutput { input, result };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in period_rows(result) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", result.per_share_value());
        }
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
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

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Prints a header for a section.
fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
