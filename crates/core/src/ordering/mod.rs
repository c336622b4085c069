//! Ordering of the selected-currency list.

pub mod error;
pub mod service;

#[cfg(test)]
mod props;

pub use error::SelectionError;
pub use service::{OrderingService, SelectionChange};
