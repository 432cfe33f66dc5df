//! Two-stage DCF valuation engine.
//!
//! The algorithm:
//!
//! 1. `FCF_t = FCF_{t-1} * (1 + g)`, with `FCF_1` supplied by the caller
//! 2. `PV_t = FCF_t / (1 + r)^t`
//! 3. `TV_N = FCF_N * (1 + gp) / (r - gp)`, `PV_TV = TV_N / (1 + r)^N`
//! 4. `Firm = sum(PV_t) + PV_TV`
//! 5. `PerShare = Firm / TotalShares`

use log::debug;

use crate::error::ValuationError;
use crate::types::{ValuationInput, ValuationResult};

/// Longest forecast horizon [`compute`] accepts, in periods.
pub const MAX_YEARS: u32 = 1_000;

/// Runs a DCF valuation and returns every intermediate step.
///
/// Preconditions are checked before any arithmetic, in this order: forecast
/// horizon (`1..=MAX_YEARS`), share count, then rate relation. A failed check
/// returns immediately; no partial result is ever produced.
///
/// The function is pure: the same input always yields a bit-identical result.
///
/// # Example
///
/// ```rust
/// use dcf_core::{compute, ValuationError, ValuationInput};
///
/// let input = ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0);
/// let result = compute(&input)?;
/// assert!((result.firm_value() - 19485.7206).abs() < 1e-3);
///
/// let bad = ValuationInput::new(10.0, 10.0, 5.0, 5.0, 3, 5.0);
/// assert!(matches!(compute(&bad), Err(ValuationError::InvalidRateRelation { .. })));
/// # Ok::<(), ValuationError>(())
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn compute(input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
    if input.years < 1 {
        debug!("rejecting valuation: years = {}", input.years);
        return Err(ValuationError::InvalidYears { years: input.years });
    }
    if input.years > MAX_YEARS {
        debug!("rejecting valuation: years = {} > {MAX_YEARS}", input.years);
        return Err(ValuationError::YearsTooLarge {
            years: input.years,
            max: MAX_YEARS,
        });
    }
    // Negated comparisons so that NaN is rejected as well.
    if !(input.total_shares > 0.0) {
        debug!("rejecting valuation: total shares = {}", input.total_shares);
        return Err(ValuationError::InvalidShares {
            total_shares: input.total_shares,
        });
    }

    let r = input.discount_rate();
    let g = input.growth_rate();
    let gp = input.perpetual_growth_rate();

    if !(r > gp) {
        debug!("rejecting valuation: r = {r}, gp = {gp}");
        return Err(ValuationError::InvalidRateRelation {
            discount_rate_pct: input.discount_rate_pct,
            perpetual_growth_pct: input.perpetual_growth_pct,
        });
    }

    let n = input.years as usize;

    // Step 1: projection, FCF_1 is the caller's figure.
    let mut projected = Vec::with_capacity(n);
    let mut current = input.fcf_base;
    for _ in 0..n {
        projected.push(current);
        current *= 1.0 + g;
    }

    // Step 2: discounting.
    let factors: Vec<f64> = (1..=input.years).map(|t| input.discount_factor(t)).collect();
    let discounted: Vec<f64> = projected
        .iter()
        .zip(&factors)
        .map(|(fcf, factor)| fcf / factor)
        .collect();
    let sum_pv: f64 = discounted.iter().sum();

    // Step 3: terminal value at the end of period N.
    let fcf_n = projected[n - 1];
    let terminal = fcf_n * (1.0 + gp) / (r - gp);
    let discounted_terminal = terminal / factors[n - 1];

    // Steps 4 and 5.
    let firm = sum_pv + discounted_terminal;
    let per_share = firm / input.total_shares;

    debug!(
        "valuation complete: N = {}, firm = {firm:.4}, per share = {per_share:.6}",
        input.years
    );

    Ok(ValuationResult::new(
        projected,
        factors,
        discounted,
        terminal,
        discounted_terminal,
        firm,
        per_share,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_a() -> ValuationInput {
        ValuationInput::new(10.0, 100.0, 10.0, 3.0, 5, 8.0)
    }

    fn scenario_b() -> ValuationInput {
        ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0)
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    #[test]
    fn test_scenario_basic() {
        let input = scenario_a();
        let result = compute(&input).unwrap();

        assert_eq!(result.projected_fcf().len(), 5);
        assert_eq!(result.discounted_fcf().len(), 5);
        assert_eq!(result.projected_fcf()[0], 10.0);
        assert_relative_eq!(
            result.per_share_value(),
            result.firm_value() / 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_scenario_reference_case() {
        let result = compute(&scenario_b()).unwrap();

        assert!((result.firm_value() - 19485.7206).abs() < 1e-3);
        assert!((result.per_share_value() - 1556.367457).abs() < 1e-6);
    }

    #[test]
    fn test_intermediate_steps() {
        let result = compute(&scenario_a()).unwrap();

        assert_relative_eq!(result.projected_fcf()[1], 10.8, epsilon = 1e-12);
        assert_relative_eq!(result.projected_fcf()[4], 13.6048896, epsilon = 1e-9);
        assert_relative_eq!(result.discounted_fcf()[0], 10.0 / 1.1, epsilon = 1e-12);

        let fcf_n = result.projected_fcf()[4];
        assert_relative_eq!(result.terminal_value(), fcf_n * 1.03 / 0.07, epsilon = 1e-9);
        assert_relative_eq!(
            result.discounted_terminal(),
            result.terminal_value() / 1.1f64.powi(5),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.firm_value(),
            result.sum_discounted_fcf() + result.discounted_terminal(),
            epsilon = 1e-9
        );
        assert_relative_eq!(result.firm_value(), 168.1313337, epsilon = 1e-6);
    }

    #[test]
    fn test_single_period() {
        let input = ValuationInput::new(50.0, 10.0, 8.0, 2.0, 1, 20.0);
        let result = compute(&input).unwrap();

        assert_eq!(result.projected_fcf(), &[50.0]);
        assert_relative_eq!(result.terminal_value(), 50.0 * 1.02 / 0.06, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_growth() {
        let input = ValuationInput::new(100.0, 1.0, 10.0, 0.0, 3, -10.0);
        let result = compute(&input).unwrap();

        assert_relative_eq!(result.projected_fcf()[1], 90.0, epsilon = 1e-9);
        assert_relative_eq!(result.projected_fcf()[2], 81.0, epsilon = 1e-9);
    }

    // ========================================================================
    // Rejections
    // ========================================================================

    #[test]
    fn test_rejects_equal_rates() {
        let input = ValuationInput::new(10.0, 10.0, 5.0, 5.0, 3, 5.0);
        assert!(matches!(
            compute(&input),
            Err(ValuationError::InvalidRateRelation { .. })
        ));
    }

    #[test]
    fn test_rejects_growth_above_discount() {
        let input = ValuationInput::new(10.0, 10.0, 5.0, 6.0, 3, 5.0);
        assert!(matches!(
            compute(&input),
            Err(ValuationError::InvalidRateRelation { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_years() {
        let mut input = scenario_a();
        input.years = 0;
        assert_eq!(
            compute(&input),
            Err(ValuationError::InvalidYears { years: 0 })
        );
    }

    #[test]
    fn test_rejects_oversized_horizon() {
        let mut input = scenario_a();
        input.years = u32::MAX;
        assert_eq!(
            compute(&input),
            Err(ValuationError::YearsTooLarge {
                years: u32::MAX,
                max: MAX_YEARS,
            })
        );

        input.years = MAX_YEARS + 1;
        assert!(matches!(
            compute(&input),
            Err(ValuationError::YearsTooLarge { .. })
        ));
    }

    #[test]
    fn test_accepts_longest_horizon() {
        let mut input = scenario_a();
        input.years = MAX_YEARS;
        let result = compute(&input).unwrap();
        assert_eq!(result.years(), MAX_YEARS as usize);
        assert!(result.firm_value().is_finite());
    }

    #[test]
    fn test_rejects_non_positive_shares() {
        for shares in [0.0, -1.0, f64::NAN] {
            let mut input = scenario_a();
            input.total_shares = shares;
            assert!(matches!(
                compute(&input),
                Err(ValuationError::InvalidShares { .. })
            ));
        }
    }

    #[test]
    fn test_validation_order() {
        // Every precondition fails; the horizon is reported first.
        let input = ValuationInput::new(10.0, 0.0, 5.0, 6.0, 0, 5.0);
        assert_eq!(compute(&input), Err(ValuationError::InvalidYears { years: 0 }));

        let input = ValuationInput::new(10.0, 0.0, 5.0, 6.0, 3, 5.0);
        assert!(matches!(
            compute(&input),
            Err(ValuationError::InvalidShares { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_rates() {
        let mut input = scenario_a();
        input.discount_rate_pct = f64::NAN;
        assert!(matches!(
            compute(&input),
            Err(ValuationError::InvalidRateRelation { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let input = scenario_b();
        let first = compute(&input).unwrap();
        let second = compute(&input).unwrap();

        assert_eq!(first.firm_value().to_bits(), second.firm_value().to_bits());
        assert_eq!(first, second);
    }
}
