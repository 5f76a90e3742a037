//! Schedule export: CSV download and JSON report

use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::amortization::{group_by_year, PaymentRecord, YearSummary};
use crate::error::{EmiError, Result};
use crate::loan::LoanParameters;
use crate::summary::LoanSummary;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 5] = ["Month", "Payment", "Principal", "Interest", "Balance"];

/// Write a schedule as CSV, amounts with two fractional digits
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &[PaymentRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for record in schedule {
        wtr.write_record([
            record.month.to_string(),
            format!("{:.2}", record.payment),
            format!("{:.2}", record.principal_paid),
            format!("{:.2}", record.interest_paid),
            format!("{:.2}", record.remaining_balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a schedule as a CSV string
pub fn schedule_to_csv_string(schedule: &[PaymentRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_schedule_csv(&mut buffer, schedule)?;
    into_utf8(buffer)
}

fn into_utf8(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer)
        .map_err(|e| EmiError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Save a schedule as a CSV file
pub fn save_schedule_csv<P: AsRef<Path>>(path: P, schedule: &[PaymentRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_schedule_csv(file, schedule)?;
    info!(
        "Wrote {} schedule rows to {}",
        schedule.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Complete calculation result for one loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanReport {
    #[serde(flatten)]
    pub summary: LoanSummary,

    pub schedule: Vec<PaymentRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<YearSummary>>,
}

impl LoanReport {
    pub fn calculate(params: &LoanParameters) -> Self {
        let schedule = params.schedule();
        let summary = LoanSummary::from_schedule(params, &schedule);
        Self {
            summary,
            schedule,
            years: None,
        }
    }

    /// Attach the year-by-year grouping of the schedule
    pub fn with_years(mut self) -> Self {
        self.years = Some(group_by_year(&self.schedule));
        self
    }

    /// Drop the monthly rows, keeping only the summary (and years, if any)
    pub fn without_schedule(mut self) -> Self {
        self.schedule.clear();
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
