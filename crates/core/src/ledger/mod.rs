//! Double-entry bookkeeping over a classified bank transaction log.
//!
//! This module implements the ledger side of statement generation:
//! - Typed transaction rows and the column set they came with
//! - Journal entries with the bank as universal counter-account
//! - Per-account debit/credit accumulation
//! - Journal balancing checks
//! - Error types for ledger operations

pub mod balance;
pub mod entry;
pub mod error;
pub mod journal;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::AccountBalance;
pub use entry::{EntryType, JournalEntry};
pub use error::LedgerError;
pub use journal::{JournalBuilder, REQUIRED_COLUMNS};
pub use transaction::{Column, Transaction, TransactionTable, coerce_amount, parse_date};
pub use validation::{JournalTotals, validate_entries};
