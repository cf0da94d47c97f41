//! Per-table accounting engine.
//!
//! One engine instance owns one immutable transaction table and exposes
//! every statement over it. Journal entries are computed once per instance.

pub mod accounting;

pub use accounting::AccountingEngine;
