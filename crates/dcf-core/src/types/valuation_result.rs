//! Step-by-step valuation output.

use serde::Serialize;

/// Every intermediate step of one DCF valuation.
///
/// Produced only by [`crate::compute`]; the per-period sequences always have
/// exactly `years` entries, indexed so that element 0 is period 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Projected free cash flow for periods 1..=N.
    projected_fcf: Vec<f64>,
    /// `(1 + r)^t` for each period.
    discount_factors: Vec<f64>,
    /// Present value of each projected cash flow.
    discounted_fcf: Vec<f64>,
    /// Perpetuity value as of the end of period N.
    terminal_value: f64,
    /// Terminal value discounted to the present.
    discounted_terminal: f64,
    /// Sum of discounted cash flows plus discounted terminal value.
    firm_value: f64,
    /// Firm value divided by total shares.
    per_share_value: f64,
}

/// One forecast period of a [`ValuationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodCashFlow {
    /// 1-based period number.
    pub period: u32,
    /// Projected free cash flow at the end of the period.
    pub projected: f64,
    /// `(1 + r)^period`.
    pub discount_factor: f64,
    /// Present value of `projected`.
    pub discounted: f64,
}

impl ValuationResult {
    pub(crate) fn new(
        projected_fcf: Vec<f64>,
        discount_factors: Vec<f64>,
        discounted_fcf: Vec<f64>,
        terminal_value: f64,
        discounted_terminal: f64,
        firm_value: f64,
        per_share_value: f64,
    ) -> Self {
        debug_assert_eq!(projected_fcf.len(), discount_factors.len());
        debug_assert_eq!(projected_fcf.len(), discounted_fcf.len());
        Self {
            projected_fcf,
            discount_factors,
            discounted_fcf,
            terminal_value,
            discounted_terminal,
            firm_value,
            per_share_value,
        }
    }

    /// Projected free cash flows, period 1 first.
    pub fn projected_fcf(&self) -> &[f64] {
        &self.projected_fcf
    }

    /// Discount factors `(1 + r)^t`, period 1 first.
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Present values of the projected cash flows, period 1 first.
    pub fn discounted_fcf(&self) -> &[f64] {
        &self.discounted_fcf
    }

    /// Gordon-growth perpetuity value at the end of period N.
    pub fn terminal_value(&self) -> f64 {
        self.terminal_value
    }

    /// Terminal value discounted to the present.
    pub fn discounted_terminal(&self) -> f64 {
        self.discounted_terminal
    }

    /// Total firm value.
    pub fn firm_value(&self) -> f64 {
        self.firm_value
    }

    /// Value per share.
    pub fn per_share_value(&self) -> f64 {
        self.per_share_value
    }

    /// Number of explicit forecast periods.
    pub fn years(&self) -> usize {
        self.projected_fcf.len()
    }

    /// Sum of the discounted forecast cash flows.
    pub fn sum_discounted_fcf(&self) -> f64 {
        self.discounted_fcf.iter().sum()
    }

    /// Iterates over the forecast periods in order.
    pub fn periods(&self) -> impl Iterator<Item = PeriodCashFlow> + '_ {
        self.projected_fcf
            .iter()
            .zip(&self.discount_factors)
            .zip(&self.discounted_fcf)
            .zip(1u32..)
            .map(
                |(((&projected, &discount_factor), &discounted), period)| PeriodCashFlow {
                    period,
                    projected,
                    discount_factor,
                    discounted,
                },
            )
    }
}
