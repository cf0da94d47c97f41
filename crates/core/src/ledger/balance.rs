//! Per-account debit/credit accumulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::EntryType;

/// Running debit and credit totals for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account label.
    pub account: String,
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
}

impl AccountBalance {
    /// Creates an empty balance for an account.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            debit_total: Decimal::ZERO,
            credit_total: Decimal::ZERO,
        }
    }

    /// Adds a debit amount.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.debit_total += amount;
    }

    /// Adds a credit amount.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.credit_total += amount;
    }

    /// Adds an amount on the given side.
    pub fn apply(&mut self, side: EntryType, amount: Decimal) {
        match side {
            EntryType::Debit => self.add_debit(amount),
            EntryType::Credit => self.add_credit(amount),
        }
    }

    /// Net balance: debit total minus credit total.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.debit_total - self.credit_total
    }

    /// Final debit balance (zero unless the net balance is positive).
    #[must_use]
    pub fn final_debit(&self) -> Decimal {
        self.balance().max(Decimal::ZERO)
    }

    /// Final credit balance (zero unless the net balance is negative).
    #[must_use]
    pub fn final_credit(&self) -> Decimal {
        (-self.balance()).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// At most one final column is non-zero, and their difference is the
        /// net balance.
        #[test]
        fn prop_final_columns_split_balance(
            debits in prop::collection::vec(amount_strategy(), 0..10),
            credits in prop::collection::vec(amount_strategy(), 0..10),
        ) {
            let mut balance = AccountBalance::new("x");
            for d in &debits {
                balance.apply(EntryType::Debit, *d);
            }
            for c in &credits {
                balance.apply(EntryType::Credit, *c);
            }

            prop_assert!(balance.final_debit().is_zero() || balance.final_credit().is_zero());
            prop_assert_eq!(balance.final_debit() - balance.final_credit(), balance.balance());
            prop_assert_eq!(balance.debit_total, debits.iter().copied().sum::<Decimal>());
            prop_assert_eq!(balance.credit_total, credits.iter().copied().sum::<Decimal>());
        }
    }

    #[test]
    fn test_debit_heavy_account() {
        let mut balance = AccountBalance::new("مصاريف تشغيل");
        balance.add_debit(dec!(300));
        balance.add_credit(dec!(100));

        assert_eq!(balance.balance(), dec!(200));
        assert_eq!(balance.final_debit(), dec!(200));
        assert_eq!(balance.final_credit(), Decimal::ZERO);
    }

    #[test]
    fn test_credit_heavy_account() {
        let mut balance = AccountBalance::new("إيرادات مبيعات");
        balance.add_credit(dec!(500));

        assert_eq!(balance.final_debit(), Decimal::ZERO);
        assert_eq!(balance.final_credit(), dec!(500));
    }

    #[test]
    fn test_zero_balance() {
        let mut balance = AccountBalance::new("البنك");
        balance.add_debit(dec!(75));
        balance.add_credit(dec!(75));

        assert_eq!(balance.final_debit(), Decimal::ZERO);
        assert_eq!(balance.final_credit(), Decimal::ZERO);
    }
}
