//! Journal entry construction from bank transactions.
//!
//! The bank account is the counter-account of every entry:
//! - A debit (money out) debits the classified account and credits the bank
//! - A credit (money in) debits the bank and credits the classified account
//!
//! The two checks are independent, so a row with both sides positive yields
//! two entries.

use rust_decimal::Decimal;
use tracing::debug;

use super::entry::JournalEntry;
use super::error::LedgerError;
use super::transaction::{Column, TransactionTable};

/// Columns the builder needs.
pub const REQUIRED_COLUMNS: [Column; 5] = [
    Column::Date,
    Column::Description,
    Column::Debit,
    Column::Credit,
    Column::Account,
];

/// Builds journal entries against a fixed bank counter-account.
#[derive(Debug, Clone)]
pub struct JournalBuilder {
    bank_account: String,
}

impl JournalBuilder {
    /// Creates a builder using `bank_account` as the counter-account.
    #[must_use]
    pub fn new(bank_account: impl Into<String>) -> Self {
        Self {
            bank_account: bank_account.into(),
        }
    }

    /// Converts every transaction into journal entries, in table order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::MissingColumns` if the table lacks any of
    /// [`REQUIRED_COLUMNS`].
    pub fn build(&self, table: &TransactionTable) -> Result<Vec<JournalEntry>, LedgerError> {
        let missing = table.missing_columns(&REQUIRED_COLUMNS);
        if !missing.is_empty() {
            return Err(LedgerError::MissingColumns(missing));
        }

        let mut entries = Vec::with_capacity(table.len());
        for row in table.rows() {
            if row.debit > Decimal::ZERO {
                entries.push(JournalEntry::new(
                    row.date,
                    row.account.as_str(),
                    self.bank_account.as_str(),
                    row.debit,
                    row.description.as_str(),
                ));
            }

            if row.credit > Decimal::ZERO {
                entries.push(JournalEntry::new(
                    row.date,
                    self.bank_account.as_str(),
                    row.account.as_str(),
                    row.credit,
                    row.description.as_str(),
                ));
            }
        }

        debug!(
            rows = table.len(),
            entries = entries.len(),
            "Built journal entries"
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(debit: Decimal, credit: Decimal, account: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "row",
            debit,
            credit,
            Decimal::ZERO,
            account,
        )
    }

    #[test]
    fn test_debit_row_credits_bank() {
        let table = TransactionTable::new(vec![row(dec!(100), Decimal::ZERO, "مصاريف تشغيل")]);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].debit_account, "مصاريف تشغيل");
        assert_eq!(entries[0].credit_account, "البنك");
        assert_eq!(entries[0].debit_amount, dec!(100));
        assert_eq!(entries[0].credit_amount, dec!(100));
    }

    #[test]
    fn test_credit_row_debits_bank() {
        let table = TransactionTable::new(vec![row(Decimal::ZERO, dec!(200), "إيرادات مبيعات")]);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].debit_account, "البنك");
        assert_eq!(entries[0].credit_account, "إيرادات مبيعات");
    }

    #[test]
    fn test_row_with_both_sides_yields_two_entries() {
        let table = TransactionTable::new(vec![row(dec!(30), dec!(45), "حسابات متنوعة")]);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].debit_account, "حسابات متنوعة");
        assert_eq!(entries[0].debit_amount, dec!(30));
        assert_eq!(entries[1].credit_account, "حسابات متنوعة");
        assert_eq!(entries[1].credit_amount, dec!(45));
    }

    #[test]
    fn test_zero_row_yields_nothing() {
        let table = TransactionTable::new(vec![row(Decimal::ZERO, Decimal::ZERO, "x")]);
        assert!(JournalBuilder::new("البنك").build(&table).unwrap().is_empty());
    }

    #[test]
    fn test_preserves_table_order() {
        let table = TransactionTable::new(vec![
            row(Decimal::ZERO, dec!(1), "a"),
            row(dec!(2), Decimal::ZERO, "b"),
            row(Decimal::ZERO, dec!(3), "c"),
        ]);
        let entries = JournalBuilder::new("Bank").build(&table).unwrap();
        let amounts: Vec<Decimal> = entries.iter().map(|e| e.debit_amount).collect();
        assert_eq!(amounts, vec![dec!(1), dec!(2), dec!(3)]);
    }

    #[test]
    fn test_missing_columns() {
        let table = TransactionTable::with_columns(
            [Column::Date, Column::Debit, Column::Credit, Column::Balance],
            vec![row(dec!(10), Decimal::ZERO, "x")],
        );
        let err = JournalBuilder::new("Bank").build(&table).unwrap_err();
        assert_eq!(
            err,
            LedgerError::MissingColumns(vec![Column::Description, Column::Account])
        );
    }
}
