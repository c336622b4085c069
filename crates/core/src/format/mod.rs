//! Locale-aware decimal formatting.

pub mod formatter;
pub mod locale;

#[cfg(test)]
mod props;

pub use formatter::{DecimalFormatter, FormatError};
pub use locale::Locale;
