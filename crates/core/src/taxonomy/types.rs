//! Account category types.

use serde::{Deserialize, Serialize};

/// Financial classification of an account label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    /// Income earned (credits to the bank).
    Revenue,
    /// Costs incurred (debits from the bank).
    Expense,
    /// Resources held, including the bank account.
    Asset,
    /// Obligations and owner's equity.
    LiabilityOrEquity,
    /// Label not present in any category table.
    Unclassified,
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
            Self::Asset => write!(f, "asset"),
            Self::LiabilityOrEquity => write!(f, "liability_or_equity"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}
