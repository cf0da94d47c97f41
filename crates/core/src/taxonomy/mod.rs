//! Account taxonomy.
//!
//! Maps classified account labels to their financial category:
//! - Revenue and expense labels feed the income statement
//! - Asset labels (including the bank itself) feed the balance sheet
//! - Anything the tables do not list is unclassified

pub mod service;
pub mod types;

pub use service::AccountTaxonomy;
pub use types::AccountCategory;
