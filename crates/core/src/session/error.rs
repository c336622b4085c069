//! Session service error types.

use ratewise_shared::{AppError, CurrencyCode};
use thiserror::Error;

use crate::keyboard::InputError;
use crate::ordering::SelectionError;
use crate::repository::RepositoryError;

/// Errors surfaced by [`super::ConverterService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The code is not in the catalog.
    #[error("Currency '{0}' not found")]
    NotFound(CurrencyCode),

    /// Selection precondition violated.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Focus invariant violated.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CURRENCY_NOT_FOUND",
            Self::Selection(err) => err.error_code(),
            Self::Input(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(code) => Self::NotFound(format!("currency {code}")),
            ServiceError::Selection(err) => Self::Validation(err.to_string()),
            ServiceError::Input(err) => Self::Validation(err.to_string()),
            ServiceError::Repository(err) => err.into(),
        }
    }
}
