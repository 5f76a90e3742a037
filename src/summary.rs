//! Per-loan summary: payment, totals and principal/interest composition

use serde::{Deserialize, Serialize};

use crate::amortization::{sum_schedule, PaymentRecord, ScheduleTotals};
use crate::loan::LoanParameters;

/// Split of total repayment between principal and interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanComposition {
    pub principal: f64,
    pub interest: f64,

    /// Fraction of total repayment that is principal, 0..=1
    pub principal_share: f64,

    /// Fraction of total repayment that is interest, 0..=1
    pub interest_share: f64,
}

impl LoanComposition {
    /// Composition from schedule totals.
    ///
    /// Falls back to the loan principal and to `emi * months - principal`
    /// when the totals carry no principal or interest.
    pub fn from_totals(params: &LoanParameters, emi: f64, totals: &ScheduleTotals) -> Self {
        let principal = if totals.total_principal != 0.0 {
            totals.total_principal
        } else {
            params.principal.max(0.0)
        };

        let interest = if totals.total_interest != 0.0 {
            totals.total_interest
        } else {
            (emi * params.term_months as f64 - params.principal).max(0.0)
        };

        let total = principal + interest;
        let (principal_share, interest_share) = if total > 0.0 {
            (principal / total, interest / total)
        } else {
            (0.0, 0.0)
        };

        Self {
            principal,
            interest,
            principal_share,
            interest_share,
        }
    }
}

/// Everything the calculator shows for one loan, minus the schedule rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub params: LoanParameters,
    pub emi: f64,
    pub totals: ScheduleTotals,
    pub composition: LoanComposition,
}

impl LoanSummary {
    pub fn from_schedule(params: &LoanParameters, schedule: &[PaymentRecord]) -> Self {
        let emi = params.emi();
        let totals = sum_schedule(schedule);
        let composition = LoanComposition::from_totals(params, emi, &totals);

        Self {
            params: *params,
            emi,
            totals,
            composition,
        }
    }

    pub fn calculate(params: &LoanParameters) -> Self {
        Self::from_schedule(params, &params.schedule())
    }
}
