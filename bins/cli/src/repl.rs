//! Line-oriented converter session.

use std::io::Write;

use ratewise_core::currency::Currency;
use ratewise_core::keyboard::KeyboardInput;
use ratewise_core::{ConverterService, CurrencyRepository};
use ratewise_shared::{AppError, CurrencyCode};
use thiserror::Error;

/// Key typed in a `keys` command to delete the last character.
pub const BACKSPACE_KEY: char = '<';

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the selected currencies.
    List,
    /// Show every known currency.
    Catalog,
    /// Add a currency to the selection.
    Select(String),
    /// Remove a currency from the selection.
    Unselect(String),
    /// Ask to remove every currency from the selection.
    Clear,
    /// Confirm a pending `clear`.
    Confirm,
    /// Cancel a pending `clear`.
    Cancel,
    /// Move keyboard focus.
    Focus(String),
    /// Type keys into the focused currency.
    Keys(String),
    /// Leave the session.
    Quit,
}

/// Errors raised while parsing a REPL line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command '{0}' (try list, catalog, select, unselect, focus, keys, clear, quit)")]
    Unknown(String),

    /// The command needs an argument.
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    /// A `keys` argument contains a character with no key.
    #[error("unsupported key '{0}'")]
    UnsupportedKey(char),
}

impl Command {
    /// Parses one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.next().map(str::to_string);
        let require = |name: &'static str| argument.clone().ok_or(CommandError::MissingArgument(name));

        let command = match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "catalog" => Self::Catalog,
            "select" | "add" => Self::Select(require("select")?),
            "unselect" | "rm" => Self::Unselect(require("unselect")?),
            "clear" => Self::Clear,
            "y" | "yes" => Self::Confirm,
            "n" | "no" => Self::Cancel,
            "focus" => Self::Focus(require("focus")?),
            "keys" | "k" => Self::Keys(require("keys")?),
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Converter state for one interactive session.
pub struct Session<R> {
    service: ConverterService<R>,
    selected: Vec<Currency>,
    confirming_clear: bool,
}

impl<R: CurrencyRepository> Session<R> {
    /// Loads the persisted selection.
    pub fn start(service: ConverterService<R>) -> anyhow::Result<Self> {
        let selected = service.retrieve_selected().map_err(AppError::from)?;
        Ok(Self {
            service,
            selected,
            confirming_clear: false,
        })
    }

    /// Runs one command and writes its output.
    ///
    /// `clear` only asks; the selection is emptied by a following `yes`.
    /// Any other command cancels the question.
    pub fn execute(&mut self, command: &Command, out: &mut impl Write) -> anyhow::Result<()> {
        let confirming = std::mem::take(&mut self.confirming_clear);
        match command {
            Command::List => {}
            Command::Catalog => return self.render_catalog(out),
            Command::Select(code) => {
                let code = self.resolve(code)?;
                self.selected = self.service.select_currency(&code, &self.selected)?;
            }
            Command::Unselect(code) => {
                let code = self.resolve(code)?;
                self.selected = self.service.unselect_currency(&code, &self.selected)?;
            }
            Command::Clear if self.selected.is_empty() => {}
            Command::Clear => {
                self.confirming_clear = true;
                writeln!(
                    out,
                    "remove all {} selected currencies? [y/N]",
                    self.selected.len()
                )?;
                return Ok(());
            }
            Command::Confirm if confirming => {
                self.selected = self.service.remove_all_currencies(&self.selected)?;
            }
            Command::Confirm | Command::Cancel => {}
            Command::Focus(code) => {
                let code = self.resolve(code)?;
                self.selected = self.service.focus(&code, &self.selected)?;
            }
            Command::Keys(keys) => self.type_keys(keys, out)?,
            Command::Quit => return Ok(()),
        }
        self.render(out)
    }

    /// Writes the converter screen.
    pub fn render(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.selected.is_empty() {
            writeln!(out, "no currencies selected; try `catalog` then `select CODE`")?;
            return Ok(());
        }
        for row in self.service.display_rows(&self.selected) {
            let marker = if row.is_focused { '>' } else { ' ' };
            if row.is_placeholder {
                writeln!(out, "{marker} {:<5} ({})", row.code, row.text)?;
            } else {
                writeln!(out, "{marker} {:<5} {}", row.code, row.text)?;
            }
        }
        Ok(())
    }

    fn render_catalog(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for record in self.service.catalog()? {
            let marker = if record.is_selected { '*' } else { ' ' };
            writeln!(
                out,
                "{marker} {:<5} {}",
                record.code.trimmed(),
                record.exchange_rate
            )?;
        }
        Ok(())
    }

    fn type_keys(&mut self, keys: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let separator = self.service.formatter().decimal_separator();
        let inputs = keys
            .chars()
            .map(|c| match c {
                BACKSPACE_KEY => Ok(KeyboardInput::Backspace),
                c => KeyboardInput::from_char(c, separator).ok_or(CommandError::UnsupportedKey(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for input in inputs {
            let outcome = self.service.process_input(input, &self.selected)?;
            if let Some(rejection) = outcome.rejection {
                writeln!(out, "rejected: {rejection}")?;
            }
            self.selected = outcome.currencies;
        }
        Ok(())
    }

    /// Maps user text to a stored code, accepting the trimmed form
    /// (`EUR` for `USD_EUR`).
    fn resolve(&self, input: &str) -> anyhow::Result<CurrencyCode> {
        let code = CurrencyCode::new(input)?;
        let found = self
            .service
            .catalog()?
            .into_iter()
            .map(|record| record.code)
            .find(|candidate| *candidate == code || candidate.trimmed() == code.as_str());
        Ok(found.unwrap_or(code))
    }
}
