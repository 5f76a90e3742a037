//! EMI amortization engine and schedule post-processing

mod engine;
mod schedule;
mod yearly;

pub(crate) use engine::is_degenerate;
pub use engine::{amortization_schedule, calculate_emi, monthly_rate, sum_schedule};
pub use schedule::{round2, PaymentRecord, ScheduleTotals};
pub use yearly::{group_by_year, year_of_month, YearSummary};
