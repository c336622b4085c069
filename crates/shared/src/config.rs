//! Application configuration management.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Number formatting configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Keyboard input limits.
    #[serde(default)]
    pub input: InputConfig,
    /// Persistent storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Number formatting configuration.
///
/// Either a named `preset` (e.g. `de-DE`) or explicit separators. Explicit
/// separators override the ones the preset provides.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Named locale preset.
    #[serde(default)]
    pub preset: Option<String>,
    /// Thousands grouping separator, a single character.
    #[serde(default)]
    pub grouping_separator: Option<String>,
    /// Decimal separator, a single character.
    #[serde(default)]
    pub decimal_separator: Option<String>,
    /// Number of integer digits per group.
    #[serde(default = "default_grouping_size")]
    pub grouping_size: usize,
}

fn default_grouping_size() -> usize {
    3
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            preset: None,
            grouping_separator: None,
            decimal_separator: None,
            grouping_size: default_grouping_size(),
        }
    }
}

/// Keyboard input limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Maximum number of digits before the decimal separator.
    #[serde(default = "default_max_integer_digits")]
    pub max_integer_digits: usize,
    /// Maximum number of digits after the decimal separator.
    #[serde(default = "default_max_decimal_places")]
    pub max_decimal_places: usize,
}

fn default_max_integer_digits() -> usize {
    20
}

fn default_max_decimal_places() -> usize {
    4
}

impl InputConfig {
    /// Largest digit total a buffer may hold so that the amount times a rate
    /// still fits the 28 significant digits of a `Decimal`.
    pub const MAX_TOTAL_DIGITS: usize = 24;
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_integer_digits: default_max_integer_digits(),
            max_decimal_places: default_max_decimal_places(),
        }
    }
}

/// Persistent storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON currency store.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/currencies.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// The currency every exchange rate is expressed against.
    #[serde(default = "default_reference_currency")]
    pub reference_currency: String,
    /// Amount of the reference currency used for placeholder hints.
    #[serde(default = "default_placeholder_amount")]
    pub placeholder_amount: String,
}

fn default_reference_currency() -> String {
    "USD".to_string()
}

fn default_placeholder_amount() -> String {
    "1".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reference_currency: default_reference_currency(),
            placeholder_amount: default_placeholder_amount(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, layering an explicit file over the defaults.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// the explicit `path`, then `RATEWISE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("RATEWISE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the loaded values for consistency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        let grouping = single_char(
            "locale.grouping_separator",
            self.locale.grouping_separator.as_deref(),
        )?;
        let decimal = single_char(
            "locale.decimal_separator",
            self.locale.decimal_separator.as_deref(),
        )?;
        if let (Some(g), Some(d)) = (grouping, decimal)
            && g == d
        {
            return Err(AppError::Validation(
                "locale.grouping_separator and locale.decimal_separator must differ".to_string(),
            ));
        }
        if self.locale.grouping_size == 0 {
            return Err(AppError::Validation(
                "locale.grouping_size must be positive".to_string(),
            ));
        }
        if self.input.max_integer_digits == 0 {
            return Err(AppError::Validation(
                "input.max_integer_digits must be positive".to_string(),
            ));
        }
        if self.input.max_decimal_places == 0 {
            return Err(AppError::Validation(
                "input.max_decimal_places must be positive".to_string(),
            ));
        }
        let total = self
            .input
            .max_integer_digits
            .saturating_add(self.input.max_decimal_places);
        if total > InputConfig::MAX_TOTAL_DIGITS {
            return Err(AppError::Validation(format!(
                "input.max_integer_digits + input.max_decimal_places must not exceed {}, got {total}",
                InputConfig::MAX_TOTAL_DIGITS
            )));
        }
        if self.catalog.reference_currency.trim().is_empty() {
            return Err(AppError::Validation(
                "catalog.reference_currency cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Extracts the single character of a separator setting.
///
/// # Errors
///
/// Returns `AppError::Validation` if the value is not exactly one character.
pub fn single_char(key: &str, value: Option<&str>) -> AppResult<Option<char>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(AppError::Validation(format!(
            "{key} must be a single character, got {value:?}"
        ))),
    }
}
