//! Headless keypad session
//!
//! Owns the display text and the typing flag, and hands the engine
//! typed operands only.

use tracing::trace;

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Engine, Operation};
use crate::keypad::display::{format_value, parse_display};
use crate::keypad::key::{Key, KeyParseError};

/// Calculator front-end state
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    engine: Engine,
    config: CalculatorConfig,
    /// Text currently shown
    display: String,
    /// Whether digits append to the display or start a new entry
    user_is_typing: bool,
    /// Last engine error, while the error indicator is shown
    error: Option<CalcError>,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator with default settings, showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            engine: Engine::new(),
            config,
            display: "0".to_string(),
            user_is_typing: false,
            error: None,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the numeric value of the display
    #[must_use]
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Returns whether an entry is in progress
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.user_is_typing
    }

    /// Returns the error behind the error indicator, if shown
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Handles a single key press and returns the new display text
    pub fn press(&mut self, key: Key) -> &str {
        trace!(key = %key, display = %self.display, typing = self.user_is_typing, "key pressed");

        if self.error.is_some() {
            match key {
                Key::Digit(_) | Key::Decimal => self.clear_all(),
                Key::Clear => {}
                // operators and functions wait for AC or a new entry
                _ => return &self.display,
            }
        }

        match key {
            Key::Digit(d) => self.digit_pressed(d),
            Key::Decimal => self.decimal_pressed(),
            Key::Operator(op) => self.operation_pressed(op),
            Key::Equals => {
                let operand = self.display_value();
                let outcome = self.engine.calculate_result(operand);
                self.show_outcome(outcome);
            }
            Key::Clear => self.clear_all(),
            Key::PlusMinus => self.function_pressed(Engine::plus_minus),
            Key::Percent => self.function_pressed(Engine::percent),
        }
        &self.display
    }

    /// Parses a button label and presses it
    pub fn press_label(&mut self, label: &str) -> Result<&str, KeyParseError> {
        let key = label.parse::<Key>()?;
        Ok(self.press(key))
    }

    /// Presses every key in order and returns the final display text
    pub fn press_all<I>(&mut self, keys: I) -> &str
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        &self.display
    }

    /// All clear: resets engine, display and error indicator
    pub fn clear_all(&mut self) {
        self.engine.clear_all();
        self.display = "0".to_string();
        self.user_is_typing = false;
        self.error = None;
    }

    fn digit_pressed(&mut self, digit: u8) {
        let Some(ch) = Key::Digit(digit).to_char() else {
            return;
        };

        if !self.user_is_typing || self.display == "0" {
            self.display = ch.to_string();
            self.user_is_typing = true;
            return;
        }

        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        if digits < self.config.entry_digit_limit() {
            self.display.push(ch);
        }
    }

    fn decimal_pressed(&mut self) {
        if !self.user_is_typing {
            self.display = "0.".to_string();
            self.user_is_typing = true;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn operation_pressed(&mut self, op: Operation) {
        let operand = self.display_value();
        let outcome = self.engine.set_operation(operand, op);
        self.show_outcome(outcome);
    }

    fn function_pressed(&mut self, f: fn(f64) -> f64) {
        self.display = format_value(f(self.display_value()));
        self.user_is_typing = false;
    }

    fn show_outcome(&mut self, outcome: CalcResult<Option<f64>>) {
        match outcome {
            Ok(Some(value)) => self.display = format_value(value),
            // tidy a half-typed entry such as "5." into "5"
            Ok(None) => self.display = format_value(self.display_value()),
            Err(err) => {
                self.display.clone_from(&self.config.error_text);
                self.error = Some(err);
            }
        }
        self.user_is_typing = false;
    }
}
