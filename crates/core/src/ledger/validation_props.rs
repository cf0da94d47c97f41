//! Property-based tests for journal construction and balancing.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::journal::JournalBuilder;
use super::transaction::{Transaction, TransactionTable};
use super::validation::{JournalTotals, validate_entries};

/// Strategy to generate a non-negative amount, zero about a third of the time.
fn amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

/// Strategy to generate an account label from a small pool.
fn account() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "مصاريف تشغيل",
        "إيرادات مبيعات",
        "سحوبات نقدية",
        "حسابات متنوعة",
        "غير مصنف",
    ])
    .prop_map(str::to_string)
}

/// Strategy to generate a transaction row.
fn row() -> impl Strategy<Value = Transaction> {
    (0u32..365, amount(), amount(), account()).prop_map(|(day, debit, credit, account)| {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(u64::from(day)))
            .unwrap();
        Transaction::new(date, "generated", debit, credit, Decimal::ZERO, account)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Journal debits always equal journal credits.
    #[test]
    fn prop_journal_is_balanced(rows in prop::collection::vec(row(), 0..50)) {
        let table = TransactionTable::new(rows);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();

        let totals = JournalTotals::from_entries(&entries);
        prop_assert!(totals.is_balanced);
        prop_assert!(validate_entries(&entries).is_ok());
    }

    /// One entry per positive side of every row.
    #[test]
    fn prop_entry_count_matches_positive_sides(rows in prop::collection::vec(row(), 0..50)) {
        let expected = rows
            .iter()
            .map(|r| usize::from(r.debit > Decimal::ZERO) + usize::from(r.credit > Decimal::ZERO))
            .sum::<usize>();

        let table = TransactionTable::new(rows);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();
        prop_assert_eq!(entries.len(), expected);
    }

    /// Journal totals equal the table's debit plus credit movement.
    #[test]
    fn prop_journal_total_equals_table_movement(rows in prop::collection::vec(row(), 0..50)) {
        let movement: Decimal = rows.iter().map(|r| r.debit + r.credit).sum();

        let table = TransactionTable::new(rows);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();
        prop_assert_eq!(JournalTotals::from_entries(&entries).debit, movement);
    }

    /// Every entry touches the bank exactly once.
    #[test]
    fn prop_bank_is_counter_account(rows in prop::collection::vec(row(), 0..50)) {
        let table = TransactionTable::new(rows);
        let entries = JournalBuilder::new("البنك").build(&table).unwrap();

        for entry in &entries {
            prop_assert!(
                (entry.debit_account == "البنك") ^ (entry.credit_account == "البنك")
            );
        }
    }
}
