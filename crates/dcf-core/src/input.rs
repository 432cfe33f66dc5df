//! Raw input parsing shared by every front-end.
//!
//! Front-ends collect six strings (from flags, prompts, or form fields) and
//! hand them to [`RawInput::parse`]. Missing and malformed values are
//! reported here, before the engine sees anything.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::compute;
use crate::error::{DcfResult, InputError};
use crate::types::{ValuationInput, ValuationResult};

/// One of the six valuation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Next period's free cash flow.
    Fcf,
    /// Total share count.
    Shares,
    /// Discount rate (WACC), percent.
    DiscountRate,
    /// Perpetual growth rate, percent.
    PerpetualGrowth,
    /// Forecast horizon, periods.
    Years,
    /// Average growth during the forecast horizon, percent.
    Growth,
}

impl Field {
    /// All fields, in the order they are gathered and validated.
    pub const ALL: [Field; 6] = [
        Field::Fcf,
        Field::Shares,
        Field::DiscountRate,
        Field::PerpetualGrowth,
        Field::Years,
        Field::Growth,
    ];

    /// Short key used for form fields.
    pub fn key(self) -> &'static str {
        match self {
            Field::Fcf => "fcf",
            Field::Shares => "shares",
            Field::DiscountRate => "r",
            Field::PerpetualGrowth => "gp",
            Field::Years => "n",
            Field::Growth => "g",
        }
    }

    /// Human-readable label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Field::Fcf => "Next-period free cash flow",
            Field::Shares => "Total shares",
            Field::DiscountRate => "Discount rate, WACC (%)",
            Field::PerpetualGrowth => "Perpetual growth rate (%)",
            Field::Years => "Forecast years N",
            Field::Growth => "Average FCF growth over N years (%)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parses a finite decimal number for `field`.
///
/// Surrounding whitespace is ignored. Blank text is a missing parameter;
/// anything that is not a finite number (including `NaN` and `inf`) is
/// malformed.
pub fn parse_decimal(field: Field, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::missing(field));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::malformed(field, text)),
    }
}

/// Parses the forecast horizon as a non-negative integer.
///
/// Zero parses successfully; rejecting it is the engine's job.
pub fn parse_years(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::missing(Field::Years));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::malformed(Field::Years, text))
}

/// The six parameters exactly as the user typed them.
///
/// Deserializes directly from an HTML form using the short keys
/// (`fcf`, `shares`, `r`, `gp`, `n`, `g`); absent keys become `None`.
/// Keeping the raw text lets a front-end echo it back after a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Next period's free cash flow.
    #[serde(default)]
    pub fcf: Option<String>,
    /// Total share count.
    #[serde(default)]
    pub shares: Option<String>,
    /// Discount rate, percent.
    #[serde(default)]
    pub r: Option<String>,
    /// Perpetual growth rate, percent.
    #[serde(default)]
    pub gp: Option<String>,
    /// Forecast horizon.
    #[serde(default)]
    pub n: Option<String>,
    /// Average growth rate, percent.
    #[serde(default)]
    pub g: Option<String>,
}

impl RawInput {
    /// Raw text for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Fcf => self.fcf.as_deref(),
            Field::Shares => self.shares.as_deref(),
            Field::DiscountRate => self.r.as_deref(),
            Field::PerpetualGrowth => self.gp.as_deref(),
            Field::Years => self.n.as_deref(),
            Field::Growth => self.g.as_deref(),
        }
    }

    /// Sets the raw text for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Fcf => self.fcf = value,
            Field::Shares => self.shares = value,
            Field::DiscountRate => self.r = value,
            Field::PerpetualGrowth => self.gp = value,
            Field::Years => self.n = value,
            Field::Growth => self.g = value,
        }
    }

    /// Raw text for `field`, or an empty string; convenient for templates.
    pub fn value_of(&self, field: Field) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Echoes a parsed input back as raw text.
    pub fn from_input(input: &ValuationInput) -> Self {
        Self {
            fcf: Some(input.fcf_base.to_string()),
            shares: Some(input.total_shares.to_string()),
            r: Some(input.discount_rate_pct.to_string()),
            gp: Some(input.perpetual_growth_pct.to_string()),
            n: Some(input.years.to_string()),
            g: Some(input.avg_growth_rate_pct.to_string()),
        }
    }

    /// Validates every field and builds a [`ValuationInput`].
    ///
    /// Fields are checked in [`Field::ALL`] order; the first failure wins.
    pub fn parse(&self) -> Result<ValuationInput, InputError> {
        let decimal = |field: Field| {
            self.get(field)
                .ok_or(InputError::missing(field))
                .and_then(|text| parse_decimal(field, text))
        };

        let fcf_base = decimal(Field::Fcf)?;
        let total_shares = decimal(Field::Shares)?;
        let discount_rate_pct = decimal(Field::DiscountRate)?;
        let perpetual_growth_pct = decimal(Field::PerpetualGrowth)?;
        let years = self
            .get(Field::Years)
            .ok_or(InputError::missing(Field::Years))
            .and_then(parse_years)?;
        let avg_growth_rate_pct = decimal(Field::Growth)?;

        Ok(ValuationInput::new(
            fcf_base,
            total_shares,
            discount_rate_pct,
            perpetual_growth_pct,
            years,
            avg_growth_rate_pct,
        ))
    }

    /// Parses and values in one step.
    ///
    /// Returns the parsed input alongside the result so callers can echo
    /// exactly what was valued.
    pub fn evaluate(&self) -> DcfResult<(ValuationInput, ValuationResult)> {
        let input = self.parse()?;
        let result = compute(&input)?;
        Ok((input, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DcfError;

    fn complete() -> RawInput {
        RawInput {
            fcf: Some("988".into()),
            shares: Some("12.52".into()),
            r: Some("10".into()),
            gp: Some("3".into()),
            n: Some("10".into()),
            g: Some("8".into()),
        }
    }

    #[test]
    fn test_parse_complete() {
        let input = complete().parse().unwrap();
        assert_eq!(input, ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut raw = complete();
        raw.set(Field::DiscountRate, "  9.5 ");
        assert_eq!(raw.parse().unwrap().discount_rate_pct, 9.5);
    }

    #[test]
    fn test_missing_and_blank() {
        let mut raw = complete();
        raw.shares = None;
        assert_eq!(raw.parse(), Err(InputError::missing(Field::Shares)));

        let mut raw = complete();
        raw.set(Field::Growth, "   ");
        assert_eq!(raw.parse(), Err(InputError::missing(Field::Growth)));
    }

    #[test]
    fn test_first_failure_wins() {
        let raw = RawInput::default();
        assert_eq!(raw.parse(), Err(InputError::missing(Field::Fcf)));
    }

    #[test]
    fn test_malformed_numbers() {
        for bad in ["abc", "1,000", "NaN", "inf", "-infinity"] {
            let mut raw = complete();
            raw.set(Field::Fcf, bad);
            assert_eq!(raw.parse(), Err(InputError::malformed(Field::Fcf, bad)));
        }
    }

    #[test]
    fn test_years_must_be_whole() {
        for bad in ["2.5", "-1", "ten"] {
            assert_eq!(parse_years(bad), Err(InputError::malformed(Field::Years, bad)));
        }
        assert_eq!(parse_years("0"), Ok(0));
        assert_eq!(parse_years(" 7 "), Ok(7));
    }

    #[test]
    fn test_echo_round_trips() {
        let input = ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0);
        let raw = RawInput::from_input(&input);
        assert_eq!(raw.value_of(Field::Shares), "12.52");
        assert_eq!(raw.parse().unwrap(), input);
    }

    #[test]
    fn test_evaluate_reports_either_layer() {
        let (input, result) = complete().evaluate().unwrap();
        assert_eq!(input.years, 10);
        assert_eq!(result.years(), 10);

        let mut raw = complete();
        raw.n = None;
        assert_eq!(
            raw.evaluate().unwrap_err(),
            DcfError::Input(InputError::missing(Field::Years))
        );

        let mut raw = complete();
        raw.set(Field::PerpetualGrowth, "12");
        assert_eq!(raw.evaluate().unwrap_err().code(), "INVALID_RATE_RELATION");
    }

    #[test]
    fn test_field_keys_unique() {
        let keys: std::collections::HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), Field::ALL.len());
    }
}
