//! EMI Engine - Loan amortization for the financial-literacy calculator
//!
//! This library provides:
//! - Equated monthly installment (EMI) calculation
//! - Month-by-month amortization schedules and totals
//! - Forgiving coercion of calculator inputs
//! - Year-by-year grouping, CSV and JSON export
//! - Batch scenario comparison

pub mod amortization;
pub mod config;
pub mod error;
pub mod export;
pub mod loan;
pub mod scenario;
pub mod summary;

// Re-export commonly used types
pub use amortization::{
    amortization_schedule, calculate_emi, group_by_year, sum_schedule, PaymentRecord,
    ScheduleTotals, YearSummary,
};
pub use config::CalculatorConfig;
pub use error::{EmiError, Result};
pub use export::{save_schedule_csv, schedule_to_csv_string, write_schedule_csv, LoanReport};
pub use loan::LoanParameters;
pub use scenario::ScenarioRunner;
pub use summary::{LoanComposition, LoanSummary};
