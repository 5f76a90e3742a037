//! Core EMI engine: fixed monthly payment and month-by-month amortization

use log::debug;

use super::schedule::{round2, PaymentRecord, ScheduleTotals};

/// Monthly interest rate for a nominal annual rate given in percent
///
/// Negative and non-finite rates are treated as zero.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return 0.0;
    }
    annual_rate_percent / 12.0 / 100.0
}

/// A loan with no principal or no term has no payment and no schedule
pub(crate) fn is_degenerate(principal: f64, term_months: u32) -> bool {
    !principal.is_finite() || principal <= 0.0 || term_months == 0
}

/// Calculate the equated monthly installment for a loan.
///
/// # Arguments
/// * `principal` - Loan amount in currency units
/// * `annual_rate_percent` - Nominal annual rate in percent (7.5 = 7.5%/year)
/// * `term_months` - Number of monthly installments
///
/// # Returns
/// The fixed monthly payment, or 0.0 when principal or term is zero.
/// A zero rate splits the principal evenly across the term.
pub fn calculate_emi(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    if is_degenerate(principal, term_months) {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_percent);
    let n = term_months as f64;

    // (1+r)^n and (1+r)^n - 1 via ln_1p/exp_m1, so tiny rates neither
    // vanish into 1.0 + r == 1.0 nor lose digits to cancellation
    let g = n * r.ln_1p();
    let growth_minus_one = g.exp_m1();
    if growth_minus_one == 0.0 {
        return principal / n;
    }

    let growth = g.exp();
    if !growth.is_finite() {
        // x / (x - 1) -> 1 as x grows without bound
        return principal * r;
    }

    principal * r * growth / growth_minus_one
}

/// Build the full amortization schedule, one record per month.
///
/// Interest for each period is charged on the balance entering that period.
/// The balance is clamped at zero so floating-point drift never leaves a
/// negative remainder in the final period.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Vec<PaymentRecord> {
    if is_degenerate(principal, term_months) {
        debug!(
            "Degenerate loan (principal={}, months={}), empty schedule",
            principal, term_months
        );
        return Vec::new();
    }

    let r = monthly_rate(annual_rate_percent);
    let emi = calculate_emi(principal, annual_rate_percent, term_months);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for month in 1..=term_months {
        let interest = if r == 0.0 { 0.0 } else { balance * r };
        let principal_paid = emi - interest;
        balance = (balance - principal_paid).max(0.0);

        schedule.push(PaymentRecord {
            month,
            payment: emi,
            principal_paid: round2(principal_paid),
            interest_paid: round2(interest),
            remaining_balance: round2(balance),
        });
    }

    debug!(
        "Built {} month schedule, emi={:.2}, residual balance={:e}",
        schedule.len(),
        emi,
        balance
    );

    schedule
}

/// Sum payment, principal and interest across a schedule.
///
/// Sums run over the already-rounded record values and are not re-rounded.
pub fn sum_schedule(schedule: &[PaymentRecord]) -> ScheduleTotals {
    schedule.iter().fold(ScheduleTotals::default(), |mut acc, record| {
        acc.add(record);
        acc
    })
}
