//! JSON transaction table loading.
//!
//! The input is an array of row objects keyed by the bank export's column
//! headers. Rows whose processing date cannot be parsed are dropped.

use std::collections::BTreeSet;
use std::path::Path;

use bankbook_core::ledger::{Column, Transaction, TransactionTable, parse_date};
use bankbook_shared::{AppError, AppResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Reads a transaction table from a JSON file.
pub fn load_table(path: &Path) -> AppResult<TransactionTable> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("{}: {e}", path.display())))?;
    parse_table(&raw)
}

/// Parses a transaction table from JSON text.
pub fn parse_table(raw: &str) -> AppResult<TransactionTable> {
    let value: Value = serde_json::from_str(raw).map_err(|e| AppError::Input(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(AppError::Input("expected a JSON array of rows".to_string()));
    };

    let mut columns = BTreeSet::new();
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(AppError::InvalidRow {
                row: index,
                reason: "expected an object".to_string(),
            });
        };
        columns.extend(fields.keys().filter_map(|key| Column::from_label(key)));
    }

    // Once any row carries a date, every row must carry a parseable one.
    let dated = columns.contains(&Column::Date);
    let mut rows = Vec::with_capacity(items.len());
    let mut dropped = 0usize;

    for (index, item) in items.into_iter().enumerate() {
        if dated {
            let date = item.get(Column::Date.label()).and_then(Value::as_str);
            if date.and_then(parse_date).is_none() {
                warn!(row = index, value = ?date, "Dropping row with invalid date");
                dropped += 1;
                continue;
            }
        }

        let row: Transaction = serde_json::from_value(item).map_err(|e| AppError::InvalidRow {
            row: index,
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    debug!(rows = rows.len(), dropped, columns = columns.len(), "Loaded transaction table");
    Ok(TransactionTable::with_columns(columns, rows))
}
