//! Scenario runner for batch EMI calculations
//!
//! Computes summaries for many independent loans, e.g. comparing tenures or
//! rates for the same principal. Each loan is a pure calculation, so batches
//! fan out across the rayon thread pool.

pub mod loader;

use log::info;
use rayon::prelude::*;

use crate::config::CalculatorConfig;
use crate::loan::LoanParameters;
use crate::summary::LoanSummary;

pub use loader::{load_scenarios, load_scenarios_from_reader};

/// Batch runner for loan scenarios
///
/// # Example
/// ```
/// use emi_engine::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// let summaries = runner.compare_terms(1_000_000.0, 7.5, &[60, 120, 240]);
/// assert_eq!(summaries.len(), 3);
/// assert!(summaries[0].emi > summaries[2].emi);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
}

impl ScenarioRunner {
    /// Create runner with default configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Summarize a single loan
    pub fn run(&self, params: &LoanParameters) -> LoanSummary {
        LoanSummary::calculate(params)
    }

    /// Summarize many loans in parallel, preserving input order
    pub fn run_batch(&self, loans: &[LoanParameters]) -> Vec<LoanSummary> {
        info!("Running {} loan scenarios", loans.len());
        loans.par_iter().map(LoanSummary::calculate).collect()
    }

    /// Same principal and tenure, different annual rates
    pub fn compare_rates(
        &self,
        principal: f64,
        rates: &[f64],
        term_months: u32,
    ) -> Vec<LoanSummary> {
        let loans: Vec<_> = rates
            .iter()
            .map(|&rate| LoanParameters::new(principal, rate, term_months))
            .collect();
        self.run_batch(&loans)
    }

    /// Same principal and rate, different tenures
    pub fn compare_terms(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        terms: &[u32],
    ) -> Vec<LoanSummary> {
        let loans: Vec<_> = terms
            .iter()
            .map(|&months| LoanParameters::new(principal, annual_rate_percent, months))
            .collect();
        self.run_batch(&loans)
    }

    /// Loans whose tenure exceeds the configured maximum
    pub fn oversized<'a>(&self, loans: &'a [LoanParameters]) -> Vec<&'a LoanParameters> {
        loans
            .iter()
            .filter(|loan| self.config.check_term(loan).is_err())
            .collect()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let loans = vec![
            LoanParameters::new(120_000.0, 0.0, 12),
            LoanParameters::new(0.0, 7.5, 120),
            LoanParameters::default(),
        ];

        let results = runner.run_batch(&loans);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].emi, 10_000.0);
        assert_eq!(results[1].emi, 0.0);
        assert_eq!(results[2].params, LoanParameters::default());
        assert_eq!(results[2], runner.run(&LoanParameters::default()));
    }

    #[test]
    fn test_compare_rates() {
        let runner = ScenarioRunner::new();
        let results = runner.compare_rates(1_000_000.0, &[0.0, 7.5, 12.0], 120);

        assert_eq!(results.len(), 3);
        // Higher rate means higher EMI and more total interest
        assert!(results[0].emi < results[1].emi && results[1].emi < results[2].emi);
        assert!(results[1].totals.total_interest < results[2].totals.total_interest);
        assert_eq!(results[0].totals.total_interest, 0.0);
    }

    #[test]
    fn test_compare_terms() {
        let runner = ScenarioRunner::new();
        let results = runner.compare_terms(1_000_000.0, 7.5, &[60, 120, 240]);

        // Longer tenure lowers the EMI but raises total interest
        assert!(results[0].emi > results[1].emi && results[1].emi > results[2].emi);
        assert!(results[0].totals.total_interest < results[2].totals.total_interest);
    }

    #[test]
    fn test_oversized() {
        let runner = ScenarioRunner::new();
        let loans = vec![
            LoanParameters::new(1.0, 1.0, 360),
            LoanParameters::new(1.0, 1.0, 5000),
        ];
        let oversized = runner.oversized(&loans);
        assert_eq!(oversized.len(), 1);
        assert_eq!(oversized[0].term_months, 5000);
    }
}
