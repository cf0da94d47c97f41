//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BalancingWarning;

/// Label of the synthetic total row of the trial balance.
pub const TOTAL_ROW_LABEL: &str = "الإجمالي";

/// Trial balance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account label.
    pub account: String,
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Final balance when the account is debit-heavy.
    pub final_debit: Decimal,
    /// Final balance when the account is credit-heavy.
    pub final_credit: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Currency code.
    pub currency: String,
    /// One row per account, in order of first appearance.
    pub accounts: Vec<TrialBalanceRow>,
    /// Sum of every column across accounts.
    pub total: TrialBalanceRow,
    /// Balancing problems detected while aggregating.
    pub warnings: Vec<BalancingWarning>,
}

impl TrialBalanceReport {
    /// Returns true if no balancing warning was raised.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Amount attributed to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAmount {
    /// Account label.
    pub account: String,
    /// Amount.
    pub amount: Decimal,
}

/// Income statement section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementSection {
    /// Section total.
    pub total: Decimal,
    /// Per-account breakdown, in order of first appearance.
    pub accounts: Vec<AccountAmount>,
}

impl IncomeStatementSection {
    /// Adds an amount to an account, creating its line on first use.
    pub fn add(&mut self, account: &str, amount: Decimal) {
        self.total += amount;
        match self.accounts.iter_mut().find(|a| a.account == account) {
            Some(line) => line.amount += amount,
            None => self.accounts.push(AccountAmount {
                account: account.to_string(),
                amount,
            }),
        }
    }
}

/// Income statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Report type identifier.
    pub report_type: String,
    /// Currency code.
    pub currency: String,
    /// Revenue credited to the bank.
    pub revenue: IncomeStatementSection,
    /// Expenses debited from the bank.
    pub expenses: IncomeStatementSection,
    /// Net income (revenue - expenses).
    pub net_income: Decimal,
}

impl IncomeStatement {
    /// Total revenue.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.revenue.total
    }

    /// Total expenses.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.expenses.total
    }
}

/// Cash flow statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Report type identifier.
    pub report_type: String,
    /// Currency code.
    pub currency: String,
    /// Cash from operating activities (revenue - expenses).
    pub operating: Decimal,
    /// Cash from investing activities. Always zero.
    pub investing: Decimal,
    /// Cash from financing activities.
    pub financing: Decimal,
    /// Net increase (decrease) in cash.
    pub net_change: Decimal,
    /// Opening balance derived as closing balance minus net change.
    pub opening_balance: Decimal,
    /// Running balance of the last transaction.
    pub closing_balance: Decimal,
    /// Opening balance reconstructed from the first transaction.
    pub observed_opening_balance: Decimal,
}

impl CashFlowStatement {
    /// Difference between the observed and the derived opening balance.
    ///
    /// Non-zero when bank movements fall outside the classified revenue,
    /// expense and financing accounts.
    #[must_use]
    pub fn unexplained_movement(&self) -> Decimal {
        self.opening_balance - self.observed_opening_balance
    }
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Report type identifier.
    pub report_type: String,
    /// Currency code.
    pub currency: String,
    /// Cash and bank balance.
    pub cash_and_bank: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities. Always zero.
    pub total_liabilities: Decimal,
    /// Capital, solved so the equation holds.
    pub capital: Decimal,
    /// Net income for the period.
    pub net_income: Decimal,
    /// Owner withdrawals.
    pub withdrawals: Decimal,
    /// Total equity (capital + net income - withdrawals).
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity.
    pub is_balanced: bool,
    /// Balancing problems detected while deriving the sheet.
    pub warnings: Vec<BalancingWarning>,
}

/// One line of a detailed expense or revenue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLine {
    /// Transaction date.
    pub date: NaiveDate,
    /// Original transaction details.
    pub description: String,
    /// Classified account label.
    pub account: String,
    /// Amount moved.
    pub amount: Decimal,
}

/// Activity statistics for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActivity {
    /// Account label.
    pub account: String,
    /// Total amount.
    pub total: Decimal,
    /// Number of transactions.
    pub count: usize,
    /// Mean transaction amount.
    pub average: Decimal,
    /// Largest transaction amount.
    pub largest: Decimal,
}

/// Movement summary for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Period label (`YYYY-MM`).
    pub period: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: u32,
    /// Total deposits.
    pub total_credit: Decimal,
    /// Total withdrawals.
    pub total_debit: Decimal,
    /// Deposits minus withdrawals.
    pub net_movement: Decimal,
    /// Running balance after the month's last transaction.
    pub closing_balance: Decimal,
}

/// Headline figures for a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Currency code.
    pub currency: String,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Net income.
    pub net_income: Decimal,
    /// Closing cash balance.
    pub closing_balance: Decimal,
    /// Net change in cash.
    pub net_cash_change: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
}

impl SummaryMetrics {
    /// Collects the headline figures from the three statements.
    #[must_use]
    pub fn from_statements(
        income: &IncomeStatement,
        cash_flow: &CashFlowStatement,
        balance_sheet: &BalanceSheet,
    ) -> Self {
        Self {
            currency: income.currency.clone(),
            total_revenue: income.total_revenue(),
            total_expenses: income.total_expenses(),
            net_income: income.net_income,
            closing_balance: cash_flow.closing_balance,
            net_cash_change: cash_flow.net_change,
            total_assets: balance_sheet.total_assets,
        }
    }
}
