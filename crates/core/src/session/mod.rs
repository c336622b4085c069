//! Use-case layer tying the engine to a currency store.

mod error;
mod service;

pub use error::ServiceError;
pub use service::{ConverterService, DisplayRow};
