//! Binary operators and their arithmetic
//!
//! The operator set is closed, so an unknown operator cannot reach the engine.

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol as printed on a handheld keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to `a` and `b`
    ///
    /// Fails instead of producing a non-finite value.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
            Self::Divide => divide(a, b),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

fn add(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a + b)
}

fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a - b)
}

fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    check_overflow(a * b)
}

fn divide(a: f64, b: f64) -> CalcResult<f64> {
    // matches both +0.0 and -0.0
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    check_overflow(a / b)
}

/// Checks for overflow (infinity or NaN)
fn check_overflow(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
