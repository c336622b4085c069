//! `CurrencyRepository` implementations.

mod json_file;
mod memory;

pub use json_file::JsonFileCurrencyRepository;
pub use memory::InMemoryCurrencyRepository;
