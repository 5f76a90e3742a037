//! Load loan scenarios from CSV
//!
//! Expected columns: `Principal,Rate,Months`. Cells are coerced the same way
//! calculator inputs are, so blank or non-numeric values become 0.

use csv::{Reader, ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

use crate::error::{EmiError, Result};
use crate::loan::LoanParameters;

/// Raw CSV row, kept as text so coercion matches the calculator
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal", default)]
    principal: String,
    #[serde(rename = "Rate", default)]
    rate: String,
    #[serde(rename = "Months", default)]
    months: String,
}

impl CsvRow {
    fn to_params(&self) -> LoanParameters {
        LoanParameters::from_text(&self.principal, &self.rate, &self.months)
    }
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LoanParameters>> {
    let headers = reader.headers()?.clone();
    for required in ["Principal", "Rate", "Months"] {
        if !headers.iter().any(|h| h == required) {
            return Err(EmiError::InvalidScenario {
                line: 1,
                message: format!("missing column {}", required),
            });
        }
    }

    let mut loans = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_params());
    }

    Ok(loans)
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All);
    builder
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanParameters>> {
    let file = File::open(path)?;
    read_all(builder().from_reader(file))
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanParameters>> {
    read_all(builder().from_reader(reader))
}
