//! Currency entity, live conversion state and conversion arithmetic.

pub mod conversion;
pub mod model;
pub mod position;
pub mod record;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::Conversion;
pub use model::Currency;
pub use position::Position;
pub use record::CurrencyRecord;
pub use service::{CurrencyService, DECIMAL_PLACES, ROUNDING_STRATEGY};
