//! Valuation input parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six scalar parameters of a two-stage DCF valuation.
///
/// All percentages are expressed in whole-number form (10 means 10%).
/// Monetary amounts and the share count share whatever unit the caller
/// chooses (e.g. hundred-millions); the engine never converts units.
///
/// # Example
///
/// ```rust
/// use dcf_core::types::ValuationInput;
///
/// let input = ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0);
/// assert_eq!(input.discount_rate(), 0.10);
/// assert_eq!(input.years, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// Free cash flow at the end of period 1 (next period's figure).
    pub fcf_base: f64,
    /// Total share count; must be positive.
    pub total_shares: f64,
    /// Discount rate (WACC), in percent.
    pub discount_rate_pct: f64,
    /// Growth rate applied beyond the forecast horizon, in percent.
    pub perpetual_growth_pct: f64,
    /// Number of explicit forecast periods.
    pub years: u32,
    /// Average growth rate during the forecast horizon, in percent.
    pub avg_growth_rate_pct: f64,
}

impl ValuationInput {
    /// Creates a new valuation input.
    #[must_use]
    pub fn new(
        fcf_base: f64,
        total_shares: f64,
        discount_rate_pct: f64,
        perpetual_growth_pct: f64,
        years: u32,
        avg_growth_rate_pct: f64,
    ) -> Self {
        Self {
            fcf_base,
            total_shares,
            discount_rate_pct,
            perpetual_growth_pct,
            years,
            avg_growth_rate_pct,
        }
    }

    /// Discount rate `r` as a decimal.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate_pct / 100.0
    }

    /// Forecast-horizon growth rate `g` as a decimal.
    pub fn growth_rate(&self) -> f64 {
        self.avg_growth_rate_pct / 100.0
    }

    /// Perpetual growth rate `gp` as a decimal.
    pub fn perpetual_growth_rate(&self) -> f64 {
        self.perpetual_growth_pct / 100.0
    }

    /// Compounded discount factor `(1 + r)^period`.
    ///
    /// A cash flow at the end of `period` is divided by this to get its
    /// present value.
    pub fn discount_factor(&self, period: u32) -> f64 {
        (1.0 + self.discount_rate()).powf(f64::from(period))
    }
}

impl fmt::Display for ValuationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FCF={:.4}, shares={:.4}, r={:.2}%, g={:.2}%, gp={:.2}%, N={}",
            self.fcf_base,
            self.total_shares,
            self.discount_rate_pct,
            self.avg_growth_rate_pct,
            self.perpetual_growth_pct,
            self.years
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rates_as_decimals() {
        let input = ValuationInput::new(10.0, 100.0, 10.0, 3.0, 5, 8.0);
        assert_relative_eq!(input.discount_rate(), 0.10);
        assert_relative_eq!(input.growth_rate(), 0.08);
        assert_relative_eq!(input.perpetual_growth_rate(), 0.03);
    }

    #[test]
    fn test_discount_factor() {
        let input = ValuationInput::new(10.0, 100.0, 10.0, 3.0, 5, 8.0);
        assert_relative_eq!(input.discount_factor(0), 1.0);
        assert_relative_eq!(input.discount_factor(1), 1.1);
        assert_relative_eq!(input.discount_factor(2), 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_display_summary() {
        let input = ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0);
        assert_eq!(
            input.to_string(),
            "FCF=988.0000, shares=12.5200, r=10.00%, g=8.00%, gp=3.00%, N=10"
        );
    }

    #[test]
    fn test_serde_field_names() {
        let input = ValuationInput::new(10.0, 100.0, 10.0, 3.0, 5, 8.0);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["fcf_base"], 10.0);
        assert_eq!(json["years"], 5);
        assert_eq!(json["avg_growth_rate_pct"], 8.0);
    }
}
