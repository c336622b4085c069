//! Converter session service.
//!
//! Holds no session state of its own. The caller owns the selected list and
//! passes it to every call; the service returns the new list and persists
//! the records that changed.

use std::slice;
use std::str::FromStr;

use ratewise_shared::{AppConfig, AppError, AppResult, CurrencyCode};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::ServiceError;
use crate::currency::{Currency, CurrencyRecord, CurrencyService, DECIMAL_PLACES};
use crate::format::DecimalFormatter;
use crate::keyboard::{FocusService, InputOutcome, KeyboardInput, KeyboardStateMachine};
use crate::ordering::{OrderingService, SelectionError};
use crate::propagation::ConversionPropagator;
use crate::repository::CurrencyRepository;

/// One rendered line of the converter screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Code with any reference prefix removed.
    pub code: String,
    /// Amount text, or the placeholder when nothing is entered.
    pub text: String,
    /// True when `text` is the placeholder hint.
    pub is_placeholder: bool,
    /// True for the currency receiving keystrokes.
    pub is_focused: bool,
}

/// Converter use cases over a [`CurrencyRepository`].
pub struct ConverterService<R> {
    repository: R,
    formatter: DecimalFormatter,
    machine: KeyboardStateMachine,
    placeholder_amount: Decimal,
}

impl<R: CurrencyRepository> ConverterService<R> {
    /// Creates a service.
    ///
    /// Each currency's placeholder hint is `placeholder_amount` converted
    /// at that currency's rate.
    pub const fn new(
        repository: R,
        formatter: DecimalFormatter,
        machine: KeyboardStateMachine,
        placeholder_amount: Decimal,
    ) -> Self {
        Self {
            repository,
            formatter,
            machine,
            placeholder_amount,
        }
    }

    /// Creates a service from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an invalid locale or a placeholder
    /// amount that is not a decimal number.
    pub fn from_config(repository: R, config: &AppConfig) -> AppResult<Self> {
        let formatter = DecimalFormatter::from_config(&config.locale)?;
        let placeholder_amount = Decimal::from_str(config.catalog.placeholder_amount.trim())
            .map_err(|err| {
                AppError::Validation(format!(
                    "catalog.placeholder_amount '{}': {err}",
                    config.catalog.placeholder_amount
                ))
            })?;
        Ok(Self::new(
            repository,
            formatter,
            KeyboardStateMachine::new(config.input),
            placeholder_amount,
        ))
    }

    /// The formatter used for display rows.
    #[must_use]
    pub const fn formatter(&self) -> &DecimalFormatter {
        &self.formatter
    }

    /// Loads the selected currencies with hints set and focus on rank 0.
    pub fn retrieve_selected(&self) -> Result<Vec<Currency>, ServiceError> {
        let selected: Vec<Currency> = self
            .repository
            .fetch_selected_currencies()?
            .into_iter()
            .map(|record| self.hydrate(record))
            .collect();
        OrderingService::validate_positions(&selected)?;
        info!(count = selected.len(), "Selected currencies loaded");
        Ok(FocusService::ensure_focus(&selected))
    }

    /// Every known currency, ordered by code.
    pub fn catalog(&self) -> Result<Vec<CurrencyRecord>, ServiceError> {
        let mut records = self.repository.fetch_all_currencies()?;
        records.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(records)
    }

    /// Adds a catalog currency to the end of the selected list.
    ///
    /// The new currency receives the converted focused amount; focus goes
    /// to rank 0 if the list had none.
    pub fn select_currency(
        &self,
        code: &CurrencyCode,
        current: &[Currency],
    ) -> Result<Vec<Currency>, ServiceError> {
        let record = self
            .repository
            .fetch_all_currencies()?
            .into_iter()
            .find(|record| record.code == *code)
            .ok_or_else(|| ServiceError::NotFound(code.clone()))?;

        let selected = OrderingService::select(&self.hydrate(record), current)?;
        if let Some(added) = selected.last() {
            self.repository
                .upsert_currencies(slice::from_ref(added.record()))?;
        }

        let mut selected = FocusService::ensure_focus(&selected);
        Self::propagate_focused(&mut selected)?;
        Ok(selected)
    }

    /// Removes a currency from the selected list.
    ///
    /// Survivors and the released record are persisted in one upsert. If
    /// the focused currency was removed, focus moves to rank 0.
    pub fn unselect_currency(
        &self,
        code: &CurrencyCode,
        current: &[Currency],
    ) -> Result<Vec<Currency>, ServiceError> {
        let Some(currency) = current.iter().find(|currency| currency.code() == code) else {
            return Err(SelectionError::NotSelected(code.clone()).into());
        };

        let change = OrderingService::unselect(currency, current)?;
        self.repository.upsert_currencies(&change.records())?;
        Ok(FocusService::ensure_focus(&change.selected))
    }

    /// Unselects everything in one upsert and returns the empty list.
    pub fn remove_all_currencies(
        &self,
        current: &[Currency],
    ) -> Result<Vec<Currency>, ServiceError> {
        let change = OrderingService::remove_all(current);
        self.repository.upsert_currencies(&change.records())?;
        Ok(change.selected)
    }

    /// Moves keyboard focus. Focus is session state and is not persisted.
    pub fn focus(
        &self,
        code: &CurrencyCode,
        current: &[Currency],
    ) -> Result<Vec<Currency>, ServiceError> {
        Ok(FocusService::focus(code, current)?)
    }

    /// Applies one keystroke to the focused currency.
    pub fn process_input(
        &self,
        input: KeyboardInput,
        current: &[Currency],
    ) -> Result<InputOutcome, ServiceError> {
        Ok(self.machine.process_input(input, current)?)
    }

    /// Renders the selected list for display.
    #[must_use]
    pub fn display_rows(&self, current: &[Currency]) -> Vec<DisplayRow> {
        current
            .iter()
            .map(|currency| {
                let conversion = currency.conversion();
                let text = conversion.display_text(&self.formatter);
                let is_placeholder = text.is_empty();
                DisplayRow {
                    code: currency.code().trimmed().to_string(),
                    text: if is_placeholder {
                        conversion.placeholder_text(&self.formatter)
                    } else {
                        text
                    },
                    is_placeholder,
                    is_focused: currency.is_focused(),
                }
            })
            .collect()
    }

    fn hydrate(&self, record: CurrencyRecord) -> Currency {
        let mut currency = Currency::from_record(record);
        if let Some(hint) = self.placeholder_amount.checked_mul(currency.exchange_rate()) {
            currency
                .conversion_mut()
                .set_hint(CurrencyService::round(hint, DECIMAL_PLACES).normalize());
        }
        currency
    }

    fn propagate_focused(currencies: &mut [Currency]) -> Result<(), ServiceError> {
        if let Some(index) = FocusService::focused_index(currencies)? {
            let focused = currencies[index].clone();
            if !focused.conversion().is_empty() {
                debug!(code = %focused.code(), "Propagating to new selection");
                ConversionPropagator::propagate(&focused, currencies);
            }
        }
        Ok(())
    }
}
