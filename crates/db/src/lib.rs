//! Currency stores for Ratewise.
//!
//! This crate provides:
//! - An in-memory store for tests and ephemeral sessions
//! - A JSON file store for the catalog and the user's selection
//! - Seeding of an empty store from a bundled catalog

pub mod repositories;
pub mod seed;

pub use repositories::{InMemoryCurrencyRepository, JsonFileCurrencyRepository};
pub use seed::{CatalogEntry, SeedError, check_reference, parse_catalog, seed_if_empty};
