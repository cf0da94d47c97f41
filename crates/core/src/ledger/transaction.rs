//! Bank transaction rows and the table that carries them.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A column of the classified transaction table.
///
/// The labels are the column headers of the source bank export and are part
/// of the input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Processing date.
    Date,
    /// Free-text transaction details.
    Description,
    /// Amount withdrawn from the bank.
    Debit,
    /// Amount deposited into the bank.
    Credit,
    /// Running bank balance after the transaction.
    Balance,
    /// Classified account label.
    Account,
    /// Calendar month of the transaction.
    Month,
    /// Calendar year of the transaction.
    Year,
}

impl Column {
    /// Every column, in table order.
    pub const ALL: [Self; 8] = [
        Self::Date,
        Self::Description,
        Self::Debit,
        Self::Credit,
        Self::Balance,
        Self::Account,
        Self::Month,
        Self::Year,
    ];

    /// Returns the header label of this column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "[SA]Processing Date",
            Self::Description => "التفاصيل",
            Self::Debit => "مدين",
            Self::Credit => "دائن",
            Self::Balance => "الرصيد",
            Self::Account => "الحساب المحاسبي",
            Self::Month => "الشهر",
            Self::Year => "السنة",
        }
    }

    /// Looks up a column by its header label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label.trim())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single classified bank transaction.
///
/// Debit and credit are non-negative; both may be positive on the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Processing date.
    #[serde(rename = "[SA]Processing Date", default, deserialize_with = "de::date")]
    pub date: NaiveDate,
    /// Free-text details from the bank statement.
    #[serde(rename = "التفاصيل", default)]
    pub description: String,
    /// Amount leaving the bank.
    #[serde(rename = "مدين", default, deserialize_with = "de::absolute_amount")]
    pub debit: Decimal,
    /// Amount entering the bank.
    #[serde(rename = "دائن", default, deserialize_with = "de::absolute_amount")]
    pub credit: Decimal,
    /// Running bank balance after this transaction.
    #[serde(rename = "الرصيد", default, deserialize_with = "de::amount")]
    pub balance: Decimal,
    /// Classified account label.
    #[serde(rename = "الحساب المحاسبي", default)]
    pub account: String,
    /// Calendar month, when supplied by the source.
    #[serde(
        rename = "الشهر",
        default,
        deserialize_with = "de::month",
        skip_serializing_if = "Option::is_none"
    )]
    pub month: Option<u32>,
    /// Calendar year, when supplied by the source.
    #[serde(
        rename = "السنة",
        default,
        deserialize_with = "de::year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,
}

impl Transaction {
    /// Creates a transaction with the month and year derived from the date.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
        balance: Decimal,
        account: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            debit,
            credit,
            balance,
            account: account.into(),
            month: Some(date.month()),
            year: Some(date.year()),
        }
    }

    /// Returns the (year, month) period of this transaction.
    ///
    /// Explicit month/year values take precedence over the date.
    #[must_use]
    pub fn period(&self) -> (i32, u32) {
        (
            self.year.unwrap_or_else(|| self.date.year()),
            self.month.unwrap_or_else(|| self.date.month()),
        )
    }
}

/// An ordered, immutable table of classified transactions.
///
/// Besides the rows, the table remembers which columns the source carried so
/// that consumers can detect missing inputs. Row order is assumed
/// chronological and is never changed.
#[derive(Debug, Clone, Default)]
pub struct TransactionTable {
    columns: BTreeSet<Column>,
    rows: Vec<Transaction>,
}

impl TransactionTable {
    /// Creates a table that carries every column.
    #[must_use]
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self::with_columns(Column::ALL, rows)
    }

    /// Creates a table that carries only the given columns.
    ///
    /// Fields of absent columns hold their default values.
    #[must_use]
    pub fn with_columns(columns: impl IntoIterator<Item = Column>, rows: Vec<Transaction>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Returns the rows in table order.
    #[must_use]
    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the source carried the column.
    #[must_use]
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Returns the required columns the table does not carry.
    #[must_use]
    pub fn missing_columns(&self, required: &[Column]) -> Vec<Column> {
        required
            .iter()
            .copied()
            .filter(|c| !self.has_column(*c))
            .collect()
    }

    /// Returns the running balance of the last row.
    ///
    /// Zero when the table is empty or has no balance column.
    #[must_use]
    pub fn closing_balance(&self) -> Decimal {
        if !self.has_column(Column::Balance) {
            return Decimal::ZERO;
        }
        self.rows.last().map_or(Decimal::ZERO, |row| row.balance)
    }

    /// Returns the balance before the first row, reconstructed from that
    /// row's running balance and movement.
    ///
    /// Zero when the table is empty or has no balance column.
    #[must_use]
    pub fn observed_opening_balance(&self) -> Decimal {
        if !self.has_column(Column::Balance) {
            return Decimal::ZERO;
        }
        self.rows
            .first()
            .map_or(Decimal::ZERO, |row| row.balance - row.credit + row.debit)
    }
}

/// Coerces a raw amount cell to a decimal.
///
/// Strips everything except digits, `.` and `-` (currency symbols, thousands
/// separators, whitespace) and parses the remainder. Cells that still do not
/// parse are zero.
#[must_use]
pub fn coerce_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Date-only layouts accepted for the processing date.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Date-time layouts accepted for the processing date; the time is dropped.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a processing date.
///
/// Accepts year-first dates separated by `-` or `/`, optionally with a time
/// part, and day-first `dd/mm/yyyy` or `dd-mm-yyyy`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

mod de {
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::IgnoredAny;

    use super::{Decimal, Deserialize, Deserializer, FromStr, NaiveDate, coerce_amount, parse_date};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(Decimal),
        Text(String),
        Other(IgnoredAny),
    }

    pub(super) fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawNumber>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawNumber::Number(value)) => value,
            Some(RawNumber::Text(text)) => coerce_amount(&text),
            Some(RawNumber::Other(_)) | None => Decimal::ZERO,
        })
    }

    pub(super) fn absolute_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        amount(deserializer).map(|value| value.abs())
    }

    /// Whole number from an integer, an integral float or a numeric string.
    fn whole<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawNumber>::deserialize(deserializer)?;
        let value = match raw {
            Some(RawNumber::Number(value)) => Some(value),
            Some(RawNumber::Text(text)) => Decimal::from_str(text.trim()).ok(),
            Some(RawNumber::Other(_)) | None => None,
        };
        Ok(value.filter(|v| v.fract().is_zero()))
    }

    pub(super) fn month<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(whole(deserializer)?
            .and_then(|v| v.to_u32())
            .filter(|m| (1..=12).contains(m)))
    }

    pub(super) fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(whole(deserializer)?.and_then(|v| v.to_i32()))
    }

    pub(super) fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("1,234.50", dec!(1234.50))]
    #[case("SAR 99", dec!(99))]
    #[case("-15.25", dec!(-15.25))]
    #[case("  42 ", dec!(42))]
    #[case("", Decimal::ZERO)]
    #[case("n/a", Decimal::ZERO)]
    #[case("-", Decimal::ZERO)]
    fn test_coerce_amount(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(coerce_amount(raw), expected);
    }

    #[rstest]
    #[case("2024-03-15", Some(date(2024, 3, 15)))]
    #[case("2024-03-15 00:00:00", Some(date(2024, 3, 15)))]
    #[case("2024-03-15T10:30:00", Some(date(2024, 3, 15)))]
    #[case("15/03/2024", Some(date(2024, 3, 15)))]
    #[case("2024/03/01", Some(date(2024, 3, 1)))]
    #[case("01-03-2024", Some(date(2024, 3, 1)))]
    #[case("2024-13-01", None)]
    #[case("yesterday", None)]
    #[case("", None)]
    fn test_parse_date(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(raw), expected);
    }

    #[test]
    fn test_column_labels_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_label(column.label()), Some(column));
        }
        assert_eq!(Column::from_label("unknown"), None);
    }

    #[test]
    fn test_deserialize_row_coerces_amounts() {
        let json = r#"{
            "[SA]Processing Date": "2024-01-15 00:00:00",
            "التفاصيل": "POS purchase",
            "مدين": "-1,250.00",
            "دائن": null,
            "الرصيد": 8750,
            "الحساب المحاسبي": "مصاريف تشغيل"
        }"#;
        let row: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(row.date, date(2024, 1, 15));
        assert_eq!(row.debit, dec!(1250.00));
        assert_eq!(row.credit, Decimal::ZERO);
        assert_eq!(row.balance, dec!(8750));
        assert_eq!(row.month, None);
        assert_eq!(row.period(), (2024, 1));
    }

    #[rstest]
    #[case::boolean(r#"true"#)]
    #[case::object(r#"{}"#)]
    #[case::array(r#"[1, 2]"#)]
    #[case::out_of_range(r#"1e40"#)]
    fn test_unusable_amount_is_zero(#[case] cell: &str) {
        let json = format!(r#"{{"[SA]Processing Date": "2024-01-01", "مدين": {cell}, "الرصيد": {cell}}}"#);
        let row: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(row.debit, Decimal::ZERO);
        assert_eq!(row.balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::integers(r#"3"#, r#"2024"#, Some(3), Some(2024))]
    #[case::integral_floats(r#"3.0"#, r#"2024.0"#, Some(3), Some(2024))]
    #[case::strings(r#""3""#, r#"" 2024 ""#, Some(3), Some(2024))]
    #[case::fractional(r#"3.5"#, r#"2024.5"#, None, None)]
    #[case::month_out_of_range(r#"13"#, r#"2024"#, None, Some(2024))]
    #[case::unusable(r#"true"#, r#"null"#, None, None)]
    fn test_lenient_period_columns(
        #[case] month: &str,
        #[case] year: &str,
        #[case] expected_month: Option<u32>,
        #[case] expected_year: Option<i32>,
    ) {
        let json = format!(r#"{{"[SA]Processing Date": "2023-07-09", "الشهر": {month}, "السنة": {year}}}"#);
        let row: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(row.month, expected_month);
        assert_eq!(row.year, expected_year);
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"[SA]Processing Date": "not a date"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_explicit_period_wins() {
        let mut row = Transaction::new(
            date(2024, 1, 31),
            "",
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            "",
        );
        assert_eq!(row.period(), (2024, 1));

        row.month = Some(2);
        assert_eq!(row.period(), (2024, 2));
    }

    #[test]
    fn test_missing_columns() {
        let table = TransactionTable::with_columns(
            [Column::Date, Column::Debit, Column::Credit],
            Vec::new(),
        );
        assert_eq!(
            table.missing_columns(&[Column::Date, Column::Description, Column::Account]),
            vec![Column::Description, Column::Account]
        );
    }

    #[test]
    fn test_closing_and_observed_opening_balance() {
        let rows = vec![
            Transaction::new(date(2024, 1, 1), "a", dec!(50), Decimal::ZERO, dec!(950), "x"),
            Transaction::new(date(2024, 1, 2), "b", Decimal::ZERO, dec!(200), dec!(1150), "y"),
        ];
        let table = TransactionTable::new(rows.clone());
        assert_eq!(table.closing_balance(), dec!(1150));
        assert_eq!(table.observed_opening_balance(), dec!(1000));

        let without_balance = TransactionTable::with_columns([Column::Date], rows);
        assert_eq!(without_balance.closing_balance(), Decimal::ZERO);
        assert_eq!(TransactionTable::default().closing_balance(), Decimal::ZERO);
    }
}
