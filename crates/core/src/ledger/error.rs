//! Ledger error types.
//!
//! None of these abort report generation: the engine logs them and falls
//! back to an empty journal so the statements stay independently usable.

use rust_decimal::Decimal;
use thiserror::Error;

use super::transaction::Column;

/// Errors that can occur while building or checking the journal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Required columns are absent from the transaction table.
    #[error("Missing required columns: {}", join_labels(.0))]
    MissingColumns(Vec<Column>),

    /// Journal debits and credits do not match.
    #[error("Journal is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedJournal {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// An entry does not mirror its amount on both sides.
    #[error("Entry {index} is not mirrored. Debit: {debit}, Credit: {credit}")]
    UnmirroredEntry {
        /// Position of the entry in the journal.
        index: usize,
        /// Debit amount of the entry.
        debit: Decimal,
        /// Credit amount of the entry.
        credit: Decimal,
    },

    /// An entry carries a zero or negative amount.
    #[error("Entry {0} has a non-positive amount")]
    NonPositiveAmount(usize),
}

fn join_labels(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LedgerError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumns(_) => "MISSING_COLUMNS",
            Self::UnbalancedJournal { .. } => "UNBALANCED_JOURNAL",
            Self::UnmirroredEntry { .. } => "UNMIRRORED_ENTRY",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
        }
    }
}
