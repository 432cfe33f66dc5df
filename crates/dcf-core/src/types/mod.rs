//! Domain types for DCF valuation.
//!
//! - [`ValuationInput`]: the six scalar parameters of one valuation
//! - [`ValuationResult`]: every intermediate step of one valuation
//! - [`PeriodCashFlow`]: a per-period view over a result

mod valuation_input;
mod valuation_result;

pub use valuation_input::ValuationInput;
pub use valuation_result::{PeriodCashFlow, ValuationResult};
