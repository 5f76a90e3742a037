//! Schedule output structures

use serde::{Deserialize, Serialize};

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Period index, starting at 1
    pub month: u32,

    /// Fixed monthly installment (unrounded)
    pub payment: f64,

    /// Part of the installment that reduces the balance, rounded to 2 decimals
    pub principal_paid: f64,

    /// Interest charged on the balance entering the period, rounded to 2 decimals
    pub interest_paid: f64,

    /// Outstanding principal after this period's payment, rounded to 2 decimals
    pub remaining_balance: f64,
}

/// Aggregate sums over a schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
}

impl ScheduleTotals {
    /// Accumulate one record into the running totals
    pub fn add(&mut self, record: &PaymentRecord) {
        self.total_payment += record.payment;
        self.total_principal += record.principal_paid;
        self.total_interest += record.interest_paid;
    }
}

/// Round to currency-subunit precision
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
