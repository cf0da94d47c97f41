//! Transaction-level reports: detailed listings, per-account activity and
//! monthly summaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::service::ReportService;
use super::types::{AccountActivity, MonthlySummary, TransactionLine};
use crate::ledger::{Column, Transaction, TransactionTable};
use crate::taxonomy::{AccountCategory, AccountTaxonomy};

impl ReportService {
    /// Lists expense-classified withdrawals, newest first.
    #[must_use]
    pub fn detailed_expense_report(
        table: &TransactionTable,
        taxonomy: &AccountTaxonomy,
    ) -> Vec<TransactionLine> {
        Self::detailed_lines(table, taxonomy, AccountCategory::Expense, |row| row.debit)
    }

    /// Lists revenue-classified deposits, newest first.
    #[must_use]
    pub fn detailed_revenue_report(
        table: &TransactionTable,
        taxonomy: &AccountTaxonomy,
    ) -> Vec<TransactionLine> {
        Self::detailed_lines(table, taxonomy, AccountCategory::Revenue, |row| row.credit)
    }

    /// Summarizes withdrawals per account, largest total first.
    #[must_use]
    pub fn expense_analysis(table: &TransactionTable) -> Vec<AccountActivity> {
        Self::activity(table, |row| row.debit)
    }

    /// Summarizes deposits per account, largest total first.
    #[must_use]
    pub fn revenue_analysis(table: &TransactionTable) -> Vec<AccountActivity> {
        Self::activity(table, |row| row.credit)
    }

    /// Summarizes movement per calendar month, oldest first.
    ///
    /// Empty when the table carries neither a date nor month/year columns.
    #[must_use]
    pub fn monthly_report(table: &TransactionTable) -> Vec<MonthlySummary> {
        let has_period = table.has_column(Column::Date)
            || (table.has_column(Column::Month) && table.has_column(Column::Year));
        if !has_period {
            return Vec::new();
        }
        let has_balance = table.has_column(Column::Balance);

        let mut months: BTreeMap<(i32, u32), MonthlySummary> = BTreeMap::new();
        for row in table.rows() {
            let (year, month) = row.period();
            let summary = months.entry((year, month)).or_insert_with(|| MonthlySummary {
                period: format!("{year}-{month:02}"),
                year,
                month,
                total_credit: Decimal::ZERO,
                total_debit: Decimal::ZERO,
                net_movement: Decimal::ZERO,
                closing_balance: Decimal::ZERO,
            });
            summary.total_credit += row.credit;
            summary.total_debit += row.debit;
            summary.net_movement = summary.total_credit - summary.total_debit;
            if has_balance {
                summary.closing_balance = row.balance;
            }
        }

        months.into_values().collect()
    }

    fn detailed_lines<F>(
        table: &TransactionTable,
        taxonomy: &AccountTaxonomy,
        category: AccountCategory,
        amount: F,
    ) -> Vec<TransactionLine>
    where
        F: Fn(&Transaction) -> Decimal,
    {
        let mut lines: Vec<TransactionLine> = table
            .rows()
            .iter()
            .filter(|&row| amount(row) > Decimal::ZERO)
            .filter(|&row| taxonomy.classify(&row.account) == category)
            .map(|row| TransactionLine {
                date: row.date,
                description: row.description.clone(),
                account: row.account.clone(),
                amount: amount(row),
            })
            .collect();

        lines.sort_by(|a, b| b.date.cmp(&a.date));
        lines
    }

    fn activity<F>(table: &TransactionTable, amount: F) -> Vec<AccountActivity>
    where
        F: Fn(&Transaction) -> Decimal,
    {
        let mut activity: Vec<AccountActivity> = Vec::new();

        for row in table.rows() {
            let value = amount(row);
            if value <= Decimal::ZERO {
                continue;
            }
            match activity.iter_mut().find(|a| a.account == row.account) {
                Some(item) => {
                    item.total += value;
                    item.count += 1;
                    item.largest = item.largest.max(value);
                }
                None => activity.push(AccountActivity {
                    account: row.account.clone(),
                    total: value,
                    count: 1,
                    average: Decimal::ZERO,
                    largest: value,
                }),
            }
        }

        for item in &mut activity {
            item.average = (item.total / Decimal::from(item.count)).round_dp(2);
            item.total = item.total.round_dp(2);
            item.largest = item.largest.round_dp(2);
        }

        activity.sort_by(|a, b| b.total.cmp(&a.total));
        activity
    }
}
