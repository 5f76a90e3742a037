//! Loan input parameters and forgiving numeric coercion
//!
//! Calculator inputs arrive as optional or free-text values. Anything missing,
//! non-numeric or non-finite becomes zero, which the engine then treats as a
//! degenerate loan instead of an error.

use serde::{Deserialize, Serialize};

use crate::amortization::{self, PaymentRecord};

/// Default loan amount shown by the calculator (10 lakh rupees)
pub const DEFAULT_PRINCIPAL: f64 = 1_000_000.0;

/// Default nominal annual rate in percent
pub const DEFAULT_RATE_PERCENT: f64 = 7.5;

/// Default tenure in months
pub const DEFAULT_TERM_MONTHS: u32 = 120;

/// Inputs for one EMI calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount in currency units
    pub principal: f64,

    /// Nominal annual rate in percent (7.5 = 7.5%/year)
    pub annual_rate_percent: f64,

    /// Number of monthly installments
    pub term_months: u32,
}

/// Coerce an optional amount: missing, NaN, infinite and negative become 0
fn coerce_amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Coerce an optional month count, truncating fractional months
fn coerce_months(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v >= 1.0 => {
            if v >= u32::MAX as f64 {
                u32::MAX
            } else {
                v.trunc() as u32
            }
        }
        _ => 0,
    }
}

/// Parse free text as a number; blank or unparseable text is None
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Build parameters from optional values, normalizing anything unusable to 0
    pub fn from_optional(
        principal: Option<f64>,
        annual_rate_percent: Option<f64>,
        term_months: Option<f64>,
    ) -> Self {
        Self {
            principal: coerce_amount(principal),
            annual_rate_percent: coerce_amount(annual_rate_percent),
            term_months: coerce_months(term_months),
        }
    }

    /// Build parameters from raw text fields, e.g. form inputs or CSV cells
    pub fn from_text(principal: &str, annual_rate_percent: &str, term_months: &str) -> Self {
        Self::from_optional(
            parse_number(principal),
            parse_number(annual_rate_percent),
            parse_number(term_months),
        )
    }

    /// True when the loan has no principal or no term
    pub fn is_degenerate(&self) -> bool {
        amortization::is_degenerate(self.principal, self.term_months)
    }

    /// Monthly interest rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        amortization::monthly_rate(self.annual_rate_percent)
    }

    /// Fixed monthly installment
    pub fn emi(&self) -> f64 {
        amortization::calculate_emi(self.principal, self.annual_rate_percent, self.term_months)
    }

    /// Full month-by-month schedule
    pub fn schedule(&self) -> Vec<PaymentRecord> {
        amortization::amortization_schedule(
            self.principal,
            self.annual_rate_percent,
            self.term_months,
        )
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self::new(DEFAULT_PRINCIPAL, DEFAULT_RATE_PERCENT, DEFAULT_TERM_MONTHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional_missing_values() {
        let params = LoanParameters::from_optional(None, None, None);
        assert_eq!(params, LoanParameters::new(0.0, 0.0, 0));
        assert!(params.is_degenerate());
        assert_eq!(params.emi(), 0.0);
        assert!(params.schedule().is_empty());
    }

    #[test]
    fn test_from_optional_non_finite() {
        let params =
            LoanParameters::from_optional(Some(f64::NAN), Some(f64::INFINITY), Some(f64::NAN));
        assert_eq!(params, LoanParameters::new(0.0, 0.0, 0));
    }

    #[test]
    fn test_from_optional_negative_and_fractional() {
        let params = LoanParameters::from_optional(Some(-50_000.0), Some(-2.0), Some(12.9));
        assert_eq!(params.principal, 0.0);
        assert_eq!(params.annual_rate_percent, 0.0);
        assert_eq!(params.term_months, 12);

        let params = LoanParameters::from_optional(Some(1000.0), Some(5.0), Some(-3.0));
        assert_eq!(params.term_months, 0);
        assert!(params.is_degenerate());
    }

    #[test]
    fn test_from_text() {
        let params = LoanParameters::from_text(" 250000 ", "8.5", "60");
        assert_eq!(params, LoanParameters::new(250_000.0, 8.5, 60));

        let params = LoanParameters::from_text("", "abc", "12");
        assert_eq!(params, LoanParameters::new(0.0, 0.0, 12));
        assert_eq!(params.emi(), 0.0);
    }

    #[test]
    fn test_default_is_calculator_initial_state() {
        let params = LoanParameters::default();
        assert_eq!(params.principal, 1_000_000.0);
        assert_eq!(params.annual_rate_percent, 7.5);
        assert_eq!(params.term_months, 120);
        assert!(!params.is_degenerate());
        assert_eq!(params.schedule().len(), 120);
    }

    #[test]
    fn test_degenerate_matches_engine() {
        let loans = [
            LoanParameters::new(0.0, 7.5, 120),
            LoanParameters::new(-1.0, 7.5, 120),
            LoanParameters::new(f64::NAN, 7.5, 12),
            LoanParameters::new(f64::INFINITY, 7.5, 12),
            LoanParameters::new(50_000.0, 9.0, 0),
            LoanParameters::new(50_000.0, 0.0, 1),
            LoanParameters::new(0.01, 30.0, 360),
        ];

        for params in &loans {
            assert_eq!(
                params.is_degenerate(),
                params.schedule().is_empty(),
                "{:?}",
                params
            );
            assert_eq!(params.is_degenerate(), params.emi() == 0.0, "{:?}", params);
        }
    }

    #[test]
    fn test_monthly_rate() {
        let params = LoanParameters::new(1000.0, 12.0, 12);
        assert!((params.monthly_rate() - 0.01).abs() < 1e-12);
    }
}
