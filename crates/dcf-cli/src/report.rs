//! Step-by-step textual report of a valuation.

use std::fmt::Write;

use dcf_core::{ValuationInput, ValuationResult};

/// Renders the five calculation steps, each with its formula, followed by an
/// input summary.
pub fn step_report(input: &ValuationInput, result: &ValuationResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_steps(&mut out, input, result);
    out
}

fn write_steps(
    out: &mut String,
    input: &ValuationInput,
    result: &ValuationResult,
) -> std::fmt::Result {
    writeln!(out, "DCF valuation, step by step:")?;

    writeln!(out, "Step 1: project free cash flow for N years")?;
    writeln!(
        out,
        "  Formula: FCF_t = FCF_{{t-1}} x (1 + g), where g = {:.2}%",
        input.avg_growth_rate_pct
    )?;
    for period in result.periods() {
        writeln!(out, "  Year {}: {:.4}", period.period, period.projected)?;
    }

    writeln!(out, "Step 2: discount each year's free cash flow to present value")?;
    writeln!(
        out,
        "  Formula: PV_t = FCF_t / (1 + r)^t, where r = {:.2}%",
        input.discount_rate_pct
    )?;
    for period in result.periods() {
        writeln!(
            out,
            "  Year {} present value: {:.4} (= {:.4} / {:.6})",
            period.period,
            period.discounted,
            period.projected,
            period.discount_factor
        )?;
    }

    writeln!(out, "Step 3: terminal value and its present value")?;
    writeln!(
        out,
        "  Formula: TV = FCF_N x (1 + gp) / (r - gp), PV_TV = TV / (1 + r)^N, \
         where gp = {:.2}%, r = {:.2}%, N = {}",
        input.perpetual_growth_pct, input.discount_rate_pct, input.years
    )?;
    writeln!(out, "  Terminal value (end of year N): {:.4}", result.terminal_value())?;
    writeln!(out, "  Present value of terminal value: {:.4}", result.discounted_terminal())?;

    writeln!(out, "Step 4: firm value")?;
    writeln!(out, "  Formula: Firm = sum(PV_t) + PV_TV")?;
    writeln!(
        out,
        "  Sum of PV_t: {:.4}, PV_TV: {:.4}",
        result.sum_discounted_fcf(),
        result.discounted_terminal()
    )?;
    writeln!(out, "  Firm value: {:.4}", result.firm_value())?;

    writeln!(out, "Step 5: value per share")?;
    writeln!(
        out,
        "  Formula: PerShare = Firm / TotalShares, where TotalShares = {:.4}",
        input.total_shares
    )?;
    writeln!(out, "  Value per share: {:.6}", result.per_share_value())?;

    writeln!(out)?;
    writeln!(out, "Inputs: {input}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcf_core::compute;

    #[test]
    fn test_report_lists_every_step() {
        let input = ValuationInput::new(988.0, 12.52, 10.0, 3.0, 10, 8.0);
        let result = compute(&input).unwrap();
        let report = step_report(&input, &result);

        for step in 1..=5 {
            assert!(report.contains(&format!("Step {step}:")));
        }
        assert!(report.contains("  Year 1: 988.0000"));
        assert!(report.contains("  Year 10: "));
        assert!(!report.contains("  Year 11: "));
        assert!(report.contains("Value per share: 1556.367457"));
        assert!(report.contains("Firm value: 19485.72"));
        assert!(report.ends_with("N=10\n"));
    }

    #[test]
    fn test_report_period_order() {
        let input = ValuationInput::new(10.0, 100.0, 10.0, 3.0, 3, 8.0);
        let result = compute(&input).unwrap();
        let report = step_report(&input, &result);

        let first = report.find("Year 1 present value").unwrap();
        let third = report.find("Year 3 present value").unwrap();
        assert!(first < third);
    }
}
