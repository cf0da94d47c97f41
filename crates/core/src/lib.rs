//! Core statement logic for Bankbook.
//!
//! This crate contains pure business logic with ZERO file or presentation
//! dependencies. It turns a classified bank transaction table into journal
//! entries and financial statements.
//!
//! # Modules
//!
//! - `taxonomy` - Account label classification
//! - `ledger` - Transaction rows, journal entries and balancing checks
//! - `reports` - Trial balance, income statement, cash flow, balance sheet
//! - `engine` - Per-table facade with a write-once journal cache

pub mod engine;
pub mod ledger;
pub mod reports;
pub mod taxonomy;

pub use engine::AccountingEngine;
