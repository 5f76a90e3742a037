//! Year-by-year grouping of a monthly schedule

use serde::{Deserialize, Serialize};

use super::schedule::PaymentRecord;

/// Aggregated view of one loan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Loan year, starting at 1
    pub year: u32,

    /// The monthly records falling in this year
    pub months: Vec<PaymentRecord>,

    pub year_payment: f64,
    pub year_principal: f64,
    pub year_interest: f64,

    /// Remaining balance after the last month of the year
    pub end_balance: f64,
}

/// Loan year for a 1-indexed month (months 1-12 are year 1)
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12).max(1)
}

/// Group a monthly schedule into loan years, ascending
pub fn group_by_year(schedule: &[PaymentRecord]) -> Vec<YearSummary> {
    let mut years: Vec<YearSummary> = Vec::new();

    for record in schedule {
        let year = year_of_month(record.month);

        let needs_new = years.last().map(|y| y.year != year).unwrap_or(true);
        if needs_new {
            years.push(YearSummary {
                year,
                months: Vec::with_capacity(12),
                year_payment: 0.0,
                year_principal: 0.0,
                year_interest: 0.0,
                end_balance: 0.0,
            });
        }

        if let Some(summary) = years.last_mut() {
            summary.year_payment += record.payment;
            summary.year_principal += record.principal_paid;
            summary.year_interest += record.interest_paid;
            summary.end_balance = record.remaining_balance;
            summary.months.push(*record);
        }
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::amortization_schedule;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_year_of_month() {
        assert_eq!(year_of_month(0), 1);
        assert_eq!(year_of_month(1), 1);
        assert_eq!(year_of_month(12), 1);
        assert_eq!(year_of_month(13), 2);
        assert_eq!(year_of_month(120), 10);
    }

    #[test]
    fn test_group_full_years() {
        let schedule = amortization_schedule(1_000_000.0, 7.5, 120);
        let years = group_by_year(&schedule);

        assert_eq!(years.len(), 10);
        for (idx, year) in years.iter().enumerate() {
            assert_eq!(year.year, idx as u32 + 1);
            assert_eq!(year.months.len(), 12);
        }

        let first = &years[0];
        assert_eq!(first.end_balance, schedule[11].remaining_balance);
        let principal: f64 = schedule[..12].iter().map(|r| r.principal_paid).sum();
        assert_abs_diff_eq!(first.year_principal, principal, epsilon = 1e-6);

        assert_eq!(years[9].end_balance, 0.0);
    }

    #[test]
    fn test_group_partial_final_year() {
        let schedule = amortization_schedule(300_000.0, 9.0, 30);
        let years = group_by_year(&schedule);

        assert_eq!(years.len(), 3);
        assert_eq!(years[2].months.len(), 6);
        assert_eq!(years[2].months[0].month, 25);

        let total_interest: f64 = years.iter().map(|y| y.year_interest).sum();
        let expected: f64 = schedule.iter().map(|r| r.interest_paid).sum();
        assert_abs_diff_eq!(total_interest, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_year(&[]).is_empty());
    }
}
