//! Calculator configuration
//!
//! Defaults match the calculator's initial state. Values can be overridden
//! from environment variables or a JSON file.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{EmiError, Result};
use crate::loan::{LoanParameters, DEFAULT_PRINCIPAL, DEFAULT_RATE_PERCENT, DEFAULT_TERM_MONTHS};

/// Number of schedule rows shown before the full schedule is requested
pub const DEFAULT_PREVIEW_ROWS: usize = 36;

/// Longest tenure the outer surfaces accept (100 years)
pub const DEFAULT_MAX_TERM_MONTHS: u32 = 1200;

/// File name used for CSV downloads
pub const DEFAULT_CSV_PATH: &str = "amortization_schedule.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub default_principal: f64,
    pub default_rate: f64,
    pub default_months: u32,

    /// Rows shown in the collapsed schedule view
    pub preview_rows: usize,

    /// Upper bound on tenure accepted from users
    pub max_term_months: u32,

    pub csv_path: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_principal: DEFAULT_PRINCIPAL,
            default_rate: DEFAULT_RATE_PERCENT,
            default_months: DEFAULT_TERM_MONTHS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            max_term_months: DEFAULT_MAX_TERM_MONTHS,
            csv_path: DEFAULT_CSV_PATH.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from `EMI_*` environment variables.
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            default_principal: lookup("EMI_DEFAULT_PRINCIPAL")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.default_principal),
            default_rate: lookup("EMI_DEFAULT_RATE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.default_rate),
            default_months: lookup("EMI_DEFAULT_MONTHS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.default_months),
            preview_rows: lookup("EMI_PREVIEW_ROWS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.preview_rows),
            max_term_months: lookup("EMI_MAX_TERM_MONTHS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_term_months),
            csv_path: lookup("EMI_CSV_PATH")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.csv_path),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_principal.is_finite() || self.default_principal < 0.0 {
            return Err(EmiError::InvalidConfig {
                message: format!("default_principal must be >= 0, got {}", self.default_principal),
            });
        }
        if !self.default_rate.is_finite() || self.default_rate < 0.0 {
            return Err(EmiError::InvalidConfig {
                message: format!("default_rate must be >= 0, got {}", self.default_rate),
            });
        }
        if self.max_term_months == 0 {
            return Err(EmiError::InvalidConfig {
                message: "max_term_months must be positive".to_string(),
            });
        }
        if self.default_months > self.max_term_months {
            return Err(EmiError::InvalidConfig {
                message: format!(
                    "default_months {} exceeds max_term_months {}",
                    self.default_months, self.max_term_months
                ),
            });
        }
        Ok(())
    }

    /// The loan the calculator starts with
    pub fn default_loan(&self) -> LoanParameters {
        LoanParameters::new(self.default_principal, self.default_rate, self.default_months)
    }

    /// Reject tenures beyond the configured maximum
    pub fn check_term(&self, params: &LoanParameters) -> Result<()> {
        if params.term_months > self.max_term_months {
            return Err(EmiError::TermTooLong {
                months: params.term_months,
                max: self.max_term_months,
            });
        }
        Ok(())
    }
}
