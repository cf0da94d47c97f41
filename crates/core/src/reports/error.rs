//! Report warning types.
//!
//! Statements never fail. Inconsistencies are reported as warnings attached
//! to the statement that found them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A balancing invariant that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BalancingWarning {
    /// Trial balance debit and credit totals differ.
    #[error("Trial balance totals are not balanced: debit {debit}, credit {credit}")]
    TrialBalanceTotals {
        /// Total debit.
        debit: Decimal,
        /// Total credit.
        credit: Decimal,
    },

    /// Trial balance final debit and credit balances differ.
    #[error("Trial balance final balances are not balanced: debit {debit}, credit {credit}")]
    TrialBalanceFinalBalances {
        /// Sum of final debit balances.
        debit: Decimal,
        /// Sum of final credit balances.
        credit: Decimal,
    },

    /// Assets differ from liabilities plus equity.
    #[error("Balance sheet is not balanced: assets {assets}, liabilities and equity {liabilities_and_equity}")]
    BalanceSheetEquation {
        /// Total assets.
        assets: Decimal,
        /// Total liabilities plus total equity.
        liabilities_and_equity: Decimal,
    },
}

impl BalancingWarning {
    /// Returns the warning code for machine-readable output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TrialBalanceTotals { .. } => "TRIAL_BALANCE_TOTALS",
            Self::TrialBalanceFinalBalances { .. } => "TRIAL_BALANCE_FINAL_BALANCES",
            Self::BalanceSheetEquation { .. } => "BALANCE_SHEET_EQUATION",
        }
    }

    /// Returns the absolute gap between the two sides.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        match self {
            Self::TrialBalanceTotals { debit, credit }
            | Self::TrialBalanceFinalBalances { debit, credit } => (*debit - *credit).abs(),
            Self::BalanceSheetEquation {
                assets,
                liabilities_and_equity,
            } => (*assets - *liabilities_and_equity).abs(),
        }
    }
}
