//! Keyboard-driven editing of the focused amount.
//!
//! Keystrokes are normalized, validated against the digit limits, and
//! committed edits are propagated to every selected currency.

pub mod error;
pub mod focus;
pub mod machine;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use error::InputError;
pub use focus::FocusService;
pub use machine::KeyboardStateMachine;
pub use types::{Digit, InputOutcome, KeyboardInput, Rejection};
pub use validation::{InputValidator, clean_input};
