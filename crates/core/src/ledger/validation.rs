//! Journal balancing checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use super::error::LedgerError;

/// Sum of debits and credits across a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JournalTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

impl JournalTotals {
    /// Sums the debit and credit amounts of the given entries.
    #[must_use]
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let debit: Decimal = entries.iter().map(|e| e.debit_amount).sum();
        let credit: Decimal = entries.iter().map(|e| e.credit_amount).sum();
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }
}

/// Validates that a journal is internally consistent.
///
/// Every entry must carry a positive amount mirrored on both sides, and the
/// journal as a whole must balance. An empty journal is valid.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_entries(entries: &[JournalEntry]) -> Result<JournalTotals, LedgerError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.debit_amount <= Decimal::ZERO || entry.credit_amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(index));
        }
        if !entry.is_balanced() {
            return Err(LedgerError::UnmirroredEntry {
                index,
                debit: entry.debit_amount,
                credit: entry.credit_amount,
            });
        }
    }

    let totals = JournalTotals::from_entries(entries);
    if !totals.is_balanced {
        return Err(LedgerError::UnbalancedJournal {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    Ok(totals)
}
