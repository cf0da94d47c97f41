//! Accounting engine over a single transaction table.

use bankbook_shared::{AppConfig, ReportConfig};
use once_cell::unsync::OnceCell;
use tracing::{debug, warn};

use crate::ledger::{
    Column, JournalBuilder, JournalEntry, REQUIRED_COLUMNS, TransactionTable, validate_entries,
};
use crate::reports::{
    AccountActivity, BalanceSheet, CashFlowStatement, IncomeStatement, MonthlySummary,
    ReportService, SummaryMetrics, TransactionLine, TrialBalanceReport,
};
use crate::taxonomy::AccountTaxonomy;

/// Generates journal entries and statements for one transaction table.
///
/// The table never changes during the engine's lifetime. Journal entries are
/// cached on first use; every other operation recomputes from the table.
/// To report on a different table, build a new engine.
#[derive(Debug)]
pub struct AccountingEngine {
    table: TransactionTable,
    taxonomy: AccountTaxonomy,
    report: ReportConfig,
    journal: OnceCell<Vec<JournalEntry>>,
}

impl AccountingEngine {
    /// Creates an engine using the taxonomy and report settings of `config`.
    #[must_use]
    pub fn new(table: TransactionTable, config: &AppConfig) -> Self {
        let taxonomy = AccountTaxonomy::new(&config.taxonomy, &config.report.bank_account);
        Self::with_parts(table, taxonomy, config.report.clone())
    }

    /// Creates an engine from an explicit taxonomy and report settings.
    #[must_use]
    pub fn with_parts(table: TransactionTable, taxonomy: AccountTaxonomy, report: ReportConfig) -> Self {
        debug!(rows = table.len(), "Created accounting engine");
        Self {
            table,
            taxonomy,
            report,
            journal: OnceCell::new(),
        }
    }

    /// Returns the columns the journal needs but the table lacks.
    #[must_use]
    pub fn missing_columns(&self) -> Vec<Column> {
        self.table.missing_columns(&REQUIRED_COLUMNS)
    }

    /// Returns the journal entries, building them on first call.
    ///
    /// Empty when the table lacks required columns; see
    /// [`missing_columns`](Self::missing_columns).
    pub fn create_journal_entries(&self) -> &[JournalEntry] {
        self.journal.get_or_init(|| {
            let builder = JournalBuilder::new(self.report.bank_account.as_str());
            match builder.build(&self.table) {
                Ok(entries) => {
                    if let Err(err) = validate_entries(&entries) {
                        warn!(code = err.error_code(), "{err}");
                    }
                    entries
                }
                Err(err) => {
                    warn!(code = err.error_code(), "{err}");
                    Vec::new()
                }
            }
        })
    }

    /// Generates the trial balance from the journal entries.
    #[must_use]
    pub fn generate_trial_balance(&self) -> TrialBalanceReport {
        ReportService::generate_trial_balance(self.create_journal_entries(), &self.report.currency)
    }

    /// Generates the income statement.
    #[must_use]
    pub fn generate_income_statement(&self) -> IncomeStatement {
        ReportService::generate_income_statement(&self.table, &self.taxonomy, &self.report.currency)
    }

    /// Generates the cash flow statement.
    #[must_use]
    pub fn generate_cash_flow_statement(&self) -> CashFlowStatement {
        ReportService::generate_cash_flow_statement(&self.table, &self.taxonomy, &self.report)
    }

    /// Generates the balance sheet.
    #[must_use]
    pub fn generate_balance_sheet(&self) -> BalanceSheet {
        let income = self.generate_income_statement();
        ReportService::generate_balance_sheet(&self.table, &self.report, &income)
    }

    /// Lists expense withdrawals, newest first.
    #[must_use]
    pub fn detailed_expense_report(&self) -> Vec<TransactionLine> {
        ReportService::detailed_expense_report(&self.table, &self.taxonomy)
    }

    /// Lists revenue deposits, newest first.
    #[must_use]
    pub fn detailed_revenue_report(&self) -> Vec<TransactionLine> {
        ReportService::detailed_revenue_report(&self.table, &self.taxonomy)
    }

    /// Summarizes withdrawals per account.
    #[must_use]
    pub fn expense_analysis(&self) -> Vec<AccountActivity> {
        ReportService::expense_analysis(&self.table)
    }

    /// Summarizes deposits per account.
    #[must_use]
    pub fn revenue_analysis(&self) -> Vec<AccountActivity> {
        ReportService::revenue_analysis(&self.table)
    }

    /// Summarizes movement per calendar month.
    #[must_use]
    pub fn monthly_report(&self) -> Vec<MonthlySummary> {
        ReportService::monthly_report(&self.table)
    }

    /// Collects dashboard headline figures.
    #[must_use]
    pub fn summary_metrics(&self) -> SummaryMetrics {
        SummaryMetrics::from_statements(
            &self.generate_income_statement(),
            &self.generate_cash_flow_statement(),
            &self.generate_balance_sheet(),
        )
    }
}
