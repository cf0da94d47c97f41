//! Statement generation service.

use std::collections::HashMap;

use bankbook_shared::ReportConfig;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::BalancingWarning;
use super::types::{
    BalanceSheet, CashFlowStatement, IncomeStatement, IncomeStatementSection, TOTAL_ROW_LABEL,
    TrialBalanceReport, TrialBalanceRow,
};
use crate::ledger::{AccountBalance, JournalEntry, TransactionTable};
use crate::taxonomy::{AccountCategory, AccountTaxonomy};

/// Service for generating financial statements.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance from journal entries.
    ///
    /// Accounts are listed in order of first appearance. Imbalances are
    /// logged and attached as warnings; the report is always returned.
    #[must_use]
    pub fn generate_trial_balance(entries: &[JournalEntry], currency: &str) -> TrialBalanceReport {
        let mut balances: Vec<AccountBalance> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            for (account, side, amount) in entry.postings() {
                let slot = *index.entry(account.to_string()).or_insert_with(|| {
                    balances.push(AccountBalance::new(account));
                    balances.len() - 1
                });
                balances[slot].apply(side, amount);
            }
        }

        let accounts: Vec<TrialBalanceRow> = balances
            .iter()
            .map(|b| TrialBalanceRow {
                account: b.account.clone(),
                total_debit: b.debit_total,
                total_credit: b.credit_total,
                final_debit: b.final_debit(),
                final_credit: b.final_credit(),
            })
            .collect();

        let total = TrialBalanceRow {
            account: TOTAL_ROW_LABEL.to_string(),
            total_debit: accounts.iter().map(|r| r.total_debit).sum(),
            total_credit: accounts.iter().map(|r| r.total_credit).sum(),
            final_debit: accounts.iter().map(|r| r.final_debit).sum(),
            final_credit: accounts.iter().map(|r| r.final_credit).sum(),
        };

        let mut warnings = Vec::new();
        if total.total_debit != total.total_credit {
            warnings.push(BalancingWarning::TrialBalanceTotals {
                debit: total.total_debit,
                credit: total.total_credit,
            });
        }
        if total.final_debit != total.final_credit {
            warnings.push(BalancingWarning::TrialBalanceFinalBalances {
                debit: total.final_debit,
                credit: total.final_credit,
            });
        }
        for warning in &warnings {
            warn!(code = warning.code(), difference = %warning.difference(), "{warning}");
        }

        TrialBalanceReport {
            report_type: "trial_balance".to_string(),
            currency: currency.to_string(),
            accounts,
            total,
            warnings,
        }
    }

    /// Generates an income statement directly from the transaction table.
    ///
    /// Revenue is the credit side of revenue-classified rows; expenses are the
    /// debit side of expense-classified rows.
    #[must_use]
    pub fn generate_income_statement(
        table: &TransactionTable,
        taxonomy: &AccountTaxonomy,
        currency: &str,
    ) -> IncomeStatement {
        let mut revenue = IncomeStatementSection::default();
        let mut expenses = IncomeStatementSection::default();

        for row in table.rows() {
            match taxonomy.classify(&row.account) {
                AccountCategory::Revenue => revenue.add(&row.account, row.credit),
                AccountCategory::Expense => expenses.add(&row.account, row.debit),
                _ => {}
            }
        }

        let net_income = revenue.total - expenses.total;

        IncomeStatement {
            report_type: "income_statement".to_string(),
            currency: currency.to_string(),
            revenue,
            expenses,
            net_income,
        }
    }

    /// Generates a cash flow statement (simplified direct method).
    ///
    /// Operating flow is recomputed from the table rather than taken from an
    /// income statement. Investing flow is always zero. The opening balance is
    /// derived backwards from the closing balance.
    #[must_use]
    pub fn generate_cash_flow_statement(
        table: &TransactionTable,
        taxonomy: &AccountTaxonomy,
        config: &ReportConfig,
    ) -> CashFlowStatement {
        let mut operating = Decimal::ZERO;
        let mut financing = Decimal::ZERO;

        for row in table.rows() {
            match taxonomy.classify(&row.account) {
                AccountCategory::Revenue => operating += row.credit,
                AccountCategory::Expense => operating -= row.debit,
                _ => {}
            }
            if config.financing_accounts.contains(&row.account) {
                financing += row.credit - row.debit;
            }
        }

        let investing = Decimal::ZERO;
        let net_change = operating + investing + financing;
        let closing_balance = table.closing_balance();

        let statement = CashFlowStatement {
            report_type: "cash_flow".to_string(),
            currency: config.currency.clone(),
            operating,
            investing,
            financing,
            net_change,
            opening_balance: closing_balance - net_change,
            closing_balance,
            observed_opening_balance: table.observed_opening_balance(),
        };

        let unexplained = statement.unexplained_movement();
        if !unexplained.is_zero() {
            debug!(
                %unexplained,
                "Cash flow opening balance differs from the first row's running balance"
            );
        }
        statement
    }

    /// Generates a balance sheet.
    ///
    /// Assets are the closing bank balance, liabilities are zero and capital
    /// is solved so that Assets = Liabilities + Equity. The equation is still
    /// checked at two decimal places.
    #[must_use]
    pub fn generate_balance_sheet(
        table: &TransactionTable,
        config: &ReportConfig,
        income: &IncomeStatement,
    ) -> BalanceSheet {
        let cash_and_bank = table.closing_balance();
        let total_assets = cash_and_bank;

        let withdrawals: Decimal = table
            .rows()
            .iter()
            .filter(|row| row.account == config.withdrawal_account)
            .map(|row| row.debit)
            .sum();

        let net_income = income.net_income;
        let total_liabilities = Decimal::ZERO;
        let capital = total_assets - total_liabilities - (net_income - withdrawals);
        let total_equity = capital + net_income - withdrawals;
        let liabilities_and_equity = total_liabilities + total_equity;

        let mut warnings = Vec::new();
        if total_assets.round_dp(2) != liabilities_and_equity.round_dp(2) {
            let warning = BalancingWarning::BalanceSheetEquation {
                assets: total_assets,
                liabilities_and_equity,
            };
            warn!(code = warning.code(), difference = %warning.difference(), "{warning}");
            warnings.push(warning);
        }

        BalanceSheet {
            report_type: "balance_sheet".to_string(),
            currency: config.currency.clone(),
            cash_and_bank,
            total_assets,
            total_liabilities,
            capital,
            net_income,
            withdrawals,
            total_equity,
            liabilities_and_equity,
            is_balanced: warnings.is_empty(),
            warnings,
        }
    }
}
