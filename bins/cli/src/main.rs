//! Bankbook command-line driver.
//!
//! Reads a classified transaction table and prints the requested statements
//! as JSON on stdout. Logs go to stderr.

mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bankbook_core::AccountingEngine;
use bankbook_shared::{AppConfig, AppError};

/// Generate journal entries and financial statements from a bank export.
#[derive(Debug, Parser)]
#[command(name = "bankbook", version, about)]
struct Cli {
    /// JSON file holding an array of classified transaction rows.
    input: PathBuf,

    /// Report to print.
    #[arg(short, long, value_enum, default_value_t = ReportKind::All)]
    report: ReportKind,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    Journal,
    TrialBalance,
    IncomeStatement,
    CashFlow,
    BalanceSheet,
    Expenses,
    Revenues,
    ExpenseAnalysis,
    RevenueAnalysis,
    Monthly,
    Summary,
    All,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bankbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app) => {
                error!(code = app.error_code(), "{app}");
                ExitCode::from(app.exit_code())
            }
            None => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    let table = input::load_table(&cli.input)?;
    info!(path = %cli.input.display(), rows = table.len(), "Loaded transactions");

    let engine = AccountingEngine::new(table, &config);
    let missing = engine.missing_columns();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|c| c.label()).collect();
        warn!(columns = ?labels, "Required columns missing, journal will be empty");
    }

    let output = render(&engine, cli.report).map_err(internal)?;
    let text = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(internal)?;
    println!("{text}");
    Ok(())
}

fn internal(err: serde_json::Error) -> AppError {
    AppError::Internal(err.to_string())
}

fn render(engine: &AccountingEngine, kind: ReportKind) -> serde_json::Result<Value> {
    let value = match kind {
        ReportKind::Journal => serde_json::to_value(engine.create_journal_entries())?,
        ReportKind::TrialBalance => serde_json::to_value(engine.generate_trial_balance())?,
        ReportKind::IncomeStatement => serde_json::to_value(engine.generate_income_statement())?,
        ReportKind::CashFlow => serde_json::to_value(engine.generate_cash_flow_statement())?,
        ReportKind::BalanceSheet => serde_json::to_value(engine.generate_balance_sheet())?,
        ReportKind::Expenses => serde_json::to_value(engine.detailed_expense_report())?,
        ReportKind::Revenues => serde_json::to_value(engine.detailed_revenue_report())?,
        ReportKind::ExpenseAnalysis => serde_json::to_value(engine.expense_analysis())?,
        ReportKind::RevenueAnalysis => serde_json::to_value(engine.revenue_analysis())?,
        ReportKind::Monthly => serde_json::to_value(engine.monthly_report())?,
        ReportKind::Summary => serde_json::to_value(engine.summary_metrics())?,
        ReportKind::All => json!({
            "missing_columns": engine
                .missing_columns()
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>(),
            "journal": engine.create_journal_entries(),
            "trial_balance": engine.generate_trial_balance(),
            "income_statement": engine.generate_income_statement(),
            "cash_flow": engine.generate_cash_flow_statement(),
            "balance_sheet": engine.generate_balance_sheet(),
            "summary": engine.summary_metrics(),
        }),
    };
    Ok(value)
}
