//! Financial statement generation.
//!
//! This module provides pure business logic for generating statements from a
//! classified transaction table:
//! - Trial Balance
//! - Income Statement
//! - Cash Flow Statement
//! - Balance Sheet
//! - Detailed listings, account activity and monthly summaries

pub mod analysis;
pub mod error;
pub mod service;
pub mod types;


pub use error::BalancingWarning;
pub use service::ReportService;
pub use types::*;
