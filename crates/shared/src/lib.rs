//! Shared configuration and error types for Bankbook.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Account taxonomy and report settings loaded from layered configuration
//! - Application-wide error types

pub mod config;
pub mod error;

pub use config::{AppConfig, ReportConfig, TaxonomyConfig};
pub use error::{AppError, AppResult};
