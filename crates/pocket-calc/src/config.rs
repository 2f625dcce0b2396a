//! Front-end configuration

use serde::{Deserialize, Serialize};

/// Keypad front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of digits accepted in a single entry
    pub max_entry_digits: usize,
    /// Text shown in place of a value after an arithmetic error
    pub error_text: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_digits: Self::DEFAULT_MAX_ENTRY_DIGITS,
            error_text: Self::DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Digits an `f64` reproduces without rounding surprises
    pub const DEFAULT_MAX_ENTRY_DIGITS: usize = 16;

    /// Longest entry that still parses to a finite `f64`
    pub const MAX_ENTRY_DIGITS_LIMIT: usize = 300;

    /// Default error indicator
    pub const DEFAULT_ERROR_TEXT: &'static str = "Error";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry digit limit, clamped to `1..=MAX_ENTRY_DIGITS_LIMIT`
    #[must_use]
    pub fn with_max_entry_digits(mut self, digits: usize) -> Self {
        self.max_entry_digits = digits.clamp(1, Self::MAX_ENTRY_DIGITS_LIMIT);
        self
    }

    /// Effective entry digit limit
    ///
    /// Deserialized configs skip the builder, so the bounds apply here too.
    #[must_use]
    pub fn entry_digit_limit(&self) -> usize {
        self.max_entry_digits.clamp(1, Self::MAX_ENTRY_DIGITS_LIMIT)
    }

    /// Set the error indicator text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }
}
