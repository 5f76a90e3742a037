//! Error types for the fallible edges of the crate
//!
//! The amortization engine itself never fails: degenerate inputs produce an
//! empty schedule. Errors only arise when exporting, loading scenario files
//! or reading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario on line {line}: {message}")]
    InvalidScenario { line: u64, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("term of {months} months exceeds the maximum of {max}")]
    TermTooLong { months: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, EmiError>;
