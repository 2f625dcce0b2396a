//! Keypad buttons and their labels

use std::str::FromStr;

use thiserror::Error;

use crate::core::Operation;

/// A single button press on the handheld keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operation),
    /// Evaluate (=)
    Equals,
    /// All clear (AC)
    Clear,
    /// Sign change (±)
    PlusMinus,
    /// Percent (%)
    Percent,
}

/// Label that does not name any key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key '{0}'")]
pub struct KeyParseError(pub String);

impl Key {
    /// Creates a digit key, `None` for values above 9
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Returns the canonical button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::PlusMinus => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the character this key adds to an entry, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "." => Self::Decimal,
            "+" => Self::Operator(Operation::Add),
            "-" | "−" => Self::Operator(Operation::Subtract),
            "*" | "×" | "x" | "X" => Self::Operator(Operation::Multiply),
            "/" | "÷" => Self::Operator(Operation::Divide),
            "=" => Self::Equals,
            "AC" | "ac" | "C" | "c" => Self::Clear,
            "+/-" | "±" => Self::PlusMinus,
            "%" => Self::Percent,
            other => {
                let mut chars = other.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => {
                        Self::digit(d as u8).ok_or_else(|| KeyParseError(s.to_string()))?
                    }
                    _ => return Err(KeyParseError(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<Key>(), Ok(Key::Digit(d)));
        }
    }

    #[test]
    fn test_parse_operator_aliases() {
        assert_eq!("+".parse::<Key>(), Ok(Key::Operator(Operation::Add)));
        assert_eq!("-".parse::<Key>(), Ok(Key::Operator(Operation::Subtract)));
        assert_eq!("−".parse::<Key>(), Ok(Key::Operator(Operation::Subtract)));
        assert_eq!("*".parse::<Key>(), Ok(Key::Operator(Operation::Multiply)));
        assert_eq!("×".parse::<Key>(), Ok(Key::Operator(Operation::Multiply)));
        assert_eq!("x".parse::<Key>(), Ok(Key::Operator(Operation::Multiply)));
        assert_eq!("/".parse::<Key>(), Ok(Key::Operator(Operation::Divide)));
        assert_eq!("÷".parse::<Key>(), Ok(Key::Operator(Operation::Divide)));
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!("=".parse::<Key>(), Ok(Key::Equals));
        assert_eq!("AC".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("c".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("+/-".parse::<Key>(), Ok(Key::PlusMinus));
        assert_eq!("±".parse::<Key>(), Ok(Key::PlusMinus));
        assert_eq!("%".parse::<Key>(), Ok(Key::Percent));
        assert_eq!(".".parse::<Key>(), Ok(Key::Decimal));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 7 ".parse::<Key>(), Ok(Key::Digit(7)));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "12".parse::<Key>(),
            Err(KeyParseError("12".to_string()))
        );
        assert!("sqrt".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_unknown_key_error_message() {
        let err = "^".parse::<Key>().unwrap_err();
        assert_eq!(err.to_string(), "unknown key '^'");
    }

    #[test]
    fn test_labels_parse_back() {
        let keys = [
            Key::Digit(3),
            Key::Decimal,
            Key::Operator(Operation::Multiply),
            Key::Equals,
            Key::Clear,
            Key::PlusMinus,
            Key::Percent,
        ];
        for key in keys {
            assert_eq!(key.label().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_digit_labels_parse_through_constructor() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<Key>().ok(), Key::digit(d));
        }
        assert!("10".parse::<Key>().is_err());
        assert!("٣".parse::<Key>().is_err());
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Key::Digit(4).to_char(), Some('4'));
        assert_eq!(Key::Decimal.to_char(), Some('.'));
        assert_eq!(Key::Equals.to_char(), None);
    }
}
