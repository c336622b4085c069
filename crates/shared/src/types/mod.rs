//! Common types used across the application.

pub mod code;

pub use code::{CurrencyCode, CurrencyCodeError, PREFIX_SEPARATOR};
