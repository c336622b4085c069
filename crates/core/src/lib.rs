//! Conversion engine for Ratewise.
//!
//! This crate contains the converter logic with ZERO storage or UI
//! dependencies. Persistence is reached through [`repository::CurrencyRepository`].
//!
//! # Modules
//!
//! - `currency` - Currency model, conversion buffer and decimal arithmetic
//! - `format` - Locale-aware grouping of numeric text
//! - `ordering` - Dense ordering of the selected currencies
//! - `keyboard` - Keystroke validation and the input state machine
//! - `propagation` - Fan-out of the focused amount to every selected currency
//! - `repository` - Storage seam
//! - `session` - Use cases over a repository

pub mod currency;
pub mod format;
pub mod keyboard;
pub mod ordering;
pub mod propagation;
pub mod repository;
pub mod session;

pub use repository::{CurrencyRepository, RepositoryError};
pub use session::{ConverterService, DisplayRow, ServiceError};
