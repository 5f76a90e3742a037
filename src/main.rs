//! EMI Calculator CLI
//!
//! Command-line interface for loan payment and amortization schedules

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use emi_engine::{
    amortization::PaymentRecord, export, group_by_year, scenario, CalculatorConfig, LoanParameters,
    LoanReport, LoanSummary, ScenarioRunner,
};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process;

/// Loan EMI and amortization schedule calculator
#[derive(Parser)]
#[command(name = "emi", version, about = "Loan EMI and amortization schedule calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (defaults come from EMI_* environment variables otherwise)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the monthly installment for a loan
    Payment(LoanArgs),
    /// Print the amortization schedule for a loan
    Schedule(ScheduleArgs),
    /// Summarize every loan in a CSV file (columns Principal,Rate,Months)
    Batch(BatchArgs),
}

/// Loan inputs; values that are not numbers count as 0
#[derive(Args, Debug)]
struct LoanArgs {
    /// Loan amount
    #[arg(long, short = 'p')]
    principal: Option<String>,

    /// Nominal annual interest rate in percent
    #[arg(long, short = 'r')]
    rate: Option<String>,

    /// Tenure in months
    #[arg(long, short = 'n')]
    months: Option<String>,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Show every month instead of the first preview rows
    #[arg(long)]
    full: bool,

    /// Group the schedule by loan year
    #[arg(long)]
    by_year: bool,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write the full schedule as CSV (to the configured csv_path when no file is given)
    #[arg(long, num_args = 0..=1)]
    output: Option<Option<PathBuf>>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file of loans
    #[arg(long, short = 'i')]
    input: PathBuf,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::from_env().context("invalid EMI_* environment configuration")?,
    };

    match cli.command {
        Commands::Payment(args) => run_payment(&config, &args),
        Commands::Schedule(args) => run_schedule(&config, &args),
        Commands::Batch(args) => run_batch(&config, &args),
    }
}

/// Resolve loan inputs: absent flags use the configured defaults,
/// present-but-invalid values coerce to 0
fn resolve_loan(config: &CalculatorConfig, args: &LoanArgs) -> Result<LoanParameters> {
    let defaults = config.default_loan();
    let principal = args.principal.clone().unwrap_or_else(|| defaults.principal.to_string());
    let rate = args.rate.clone().unwrap_or_else(|| defaults.annual_rate_percent.to_string());
    let months = args.months.clone().unwrap_or_else(|| defaults.term_months.to_string());

    let params = LoanParameters::from_text(&principal, &rate, &months);
    config.check_term(&params)?;
    Ok(params)
}

fn print_loan_header(params: &LoanParameters) {
    println!("Loan Summary");
    println!("  Principal: ₹{:.2}", params.principal);
    println!("  Rate:      {}%", params.annual_rate_percent);
    println!("  Tenure:    {} months", params.term_months);
}

fn run_payment(config: &CalculatorConfig, args: &LoanArgs) -> Result<()> {
    let params = resolve_loan(config, args)?;
    let summary = LoanSummary::calculate(&params);

    print_loan_header(&params);
    println!();
    println!("Monthly EMI:     ₹{:.2}", summary.emi);
    println!("Total Payment:   ₹{:.2}", summary.totals.total_payment);
    println!("Total Interest:  ₹{:.2}", summary.totals.total_interest);
    println!(
        "Composition:     {:.1}% principal / {:.1}% interest",
        summary.composition.principal_share * 100.0,
        summary.composition.interest_share * 100.0
    );
    Ok(())
}

fn print_schedule_table(rows: &[PaymentRecord]) {
    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>16}",
        "Period", "Payment", "Principal", "Interest", "Balance"
    );
    println!("{}", "-".repeat(68));
    for row in rows {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            row.month, row.payment, row.principal_paid, row.interest_paid, row.remaining_balance
        );
    }
}

fn print_year_table(schedule: &[PaymentRecord]) {
    println!(
        "{:>12} {:>16} {:>14} {:>14} {:>16}",
        "Year", "Payment", "Principal", "Interest", "End Balance"
    );
    println!("{}", "-".repeat(76));
    for year in group_by_year(schedule) {
        let label = format!("{} ({}m)", year.year, year.months.len());
        println!(
            "{:>12} {:>16.2} {:>14.0} {:>14.0} {:>16.0}",
            label, year.year_payment, year.year_principal, year.year_interest, year.end_balance
        );
    }
}

fn run_schedule(config: &CalculatorConfig, args: &ScheduleArgs) -> Result<()> {
    let params = resolve_loan(config, &args.loan)?;
    let report = LoanReport::calculate(&params);
    info!(
        "Calculated {} month schedule for principal {}",
        report.schedule.len(),
        params.principal
    );

    if let Some(output) = &args.output {
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.csv_path));
        export::save_schedule_csv(&path, &report.schedule)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Schedule written to: {}", path.display());
    }

    match args.format {
        OutputFormat::Csv => {
            export::write_schedule_csv(io::stdout().lock(), &report.schedule)?;
        }
        OutputFormat::Json => {
            let report = if args.by_year { report.with_years() } else { report };
            println!("{}", report.to_json_pretty()?);
        }
        OutputFormat::Table => {
            print_loan_header(&params);
            println!("Monthly EMI: ₹{:.2}", report.summary.emi);
            println!();

            if report.schedule.is_empty() {
                println!("No schedule: principal and tenure must both be positive.");
                return Ok(());
            }

            if args.by_year {
                print_year_table(&report.schedule);
            } else if args.full || report.schedule.len() <= config.preview_rows {
                print_schedule_table(&report.schedule);
            } else {
                print_schedule_table(&report.schedule[..config.preview_rows]);
                println!(
                    "... ({} more months, use --full to show all)",
                    report.schedule.len() - config.preview_rows
                );
            }

            let totals = &report.summary.totals;
            println!();
            println!("Totals:");
            println!("  Payment:   ₹{:.2}", totals.total_payment);
            println!("  Principal: ₹{:.2}", totals.total_principal);
            println!("  Interest:  ₹{:.2}", totals.total_interest);
        }
    }

    Ok(())
}

fn run_batch(config: &CalculatorConfig, args: &BatchArgs) -> Result<()> {
    let loans = scenario::load_scenarios(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;

    let runner = ScenarioRunner::with_config(config.clone());
    let oversized = runner.oversized(&loans);
    if let Some(loan) = oversized.first() {
        anyhow::bail!(
            "{} scenario(s) exceed the maximum tenure of {} months (first: {} months)",
            oversized.len(),
            config.max_term_months,
            loan.term_months
        );
    }

    let summaries = runner.run_batch(&loans);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            wtr.write_record([
                "Principal",
                "Rate",
                "Months",
                "EMI",
                "TotalPayment",
                "TotalPrincipal",
                "TotalInterest",
            ])?;
            for s in &summaries {
                wtr.write_record([
                    format!("{:.2}", s.params.principal),
                    s.params.annual_rate_percent.to_string(),
                    s.params.term_months.to_string(),
                    format!("{:.2}", s.emi),
                    format!("{:.2}", s.totals.total_payment),
                    format!("{:.2}", s.totals.total_principal),
                    format!("{:.2}", s.totals.total_interest),
                ])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => {
            println!(
                "{:>14} {:>7} {:>7} {:>12} {:>16} {:>16}",
                "Principal", "Rate", "Months", "EMI", "Total Payment", "Total Interest"
            );
            println!("{}", "-".repeat(78));
            for s in &summaries {
                println!(
                    "{:>14.2} {:>7} {:>7} {:>12.2} {:>16.2} {:>16.2}",
                    s.params.principal,
                    s.params.annual_rate_percent,
                    s.params.term_months,
                    s.emi,
                    s.totals.total_payment,
                    s.totals.total_interest
                );
            }
        }
    }

    Ok(())
}
