//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use dcf_core::{Field, RawInput};

/// DCF - Two-stage discounted cash flow valuation
///
/// Any parameter not given as a flag (or environment variable) is asked for
/// interactively. Percentages are whole numbers: 10 means 10%.
#[derive(Parser, Debug)]
#[command(name = "dcf")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Next-period free cash flow
    #[arg(long, env = "DCF_FCF")]
    pub fcf: Option<String>,

    /// Total shares
    #[arg(long, env = "DCF_SHARES")]
    pub shares: Option<String>,

    /// Discount rate, WACC (%)
    #[arg(short = 'r', long = "discount-rate", visible_alias = "wacc", env = "DCF_DISCOUNT_RATE")]
    pub discount_rate: Option<String>,

    /// Perpetual growth rate (%)
    #[arg(long = "perpetual-growth", visible_alias = "gp", env = "DCF_PERPETUAL_GROWTH")]
    pub perpetual_growth: Option<String>,

    /// Number of forecast years N
    #[arg(short = 'n', long, env = "DCF_YEARS")]
    pub years: Option<String>,

    /// Average FCF growth rate over the N forecast years (%)
    #[arg(short = 'g', long, env = "DCF_GROWTH")]
    pub growth: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    pub format: OutputFormat,

    /// Never prompt; fail if a parameter is missing
    #[arg(long)]
    pub no_input: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collects whatever parameters were supplied on the command line.
    pub fn raw_input(&self) -> RawInput {
        let mut raw = RawInput::default();
        let supplied = [
            (Field::Fcf, &self.fcf),
            (Field::Shares, &self.shares),
            (Field::DiscountRate, &self.discount_rate),
            (Field::PerpetualGrowth, &self.perpetual_growth),
            (Field::Years, &self.years),
            (Field::Growth, &self.growth),
        ];
        for (field, value) in supplied {
            if let Some(value) = value {
                raw.set(field, value.clone());
            }
        }
        raw
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step walkthrough of the calculation
    #[default]
    Report,
    /// Human-readable tables
    Table,
    /// JSON with input and result
    Json,
    /// CSV, one row per forecast period
    Csv,
    /// Minimal output (just the per-share value)
    Minimal,
}
