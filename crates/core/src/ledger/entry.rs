//! Journal entry domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit posting (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit posting (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

/// One double-entry record derived from a bank transaction.
///
/// The amount is mirrored on both sides, never split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Transaction date.
    pub date: NaiveDate,
    /// Account debited.
    pub debit_account: String,
    /// Account credited.
    pub credit_account: String,
    /// Amount debited.
    pub debit_amount: Decimal,
    /// Amount credited.
    pub credit_amount: Decimal,
    /// Description copied from the transaction.
    pub description: String,
}

impl JournalEntry {
    /// Creates an entry debiting `debit_account` and crediting `credit_account`.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            debit_amount: amount,
            credit_amount: amount,
            description: description.into(),
        }
    }

    /// Returns the two postings of this entry: the debit first, then the credit.
    #[must_use]
    pub fn postings(&self) -> [(&str, EntryType, Decimal); 2] {
        [
            (self.debit_account.as_str(), EntryType::Debit, self.debit_amount),
            (self.credit_account.as_str(), EntryType::Credit, self.credit_amount),
        ]
    }

    /// Returns true if both sides carry the same amount.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit_amount == self.credit_amount
    }
}
