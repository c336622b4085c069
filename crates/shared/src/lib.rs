//! Shared types, errors, and configuration for Ratewise.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes, the primary key of the catalog
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CatalogConfig, InputConfig, LocaleConfig, StorageConfig};
pub use error::{AppError, AppResult};
pub use types::CurrencyCode;
