//! Calculator engine core
//!
//! Immediate (left-to-right) four-function arithmetic over `f64`.
//! Results that would leave the finite range are rejected, so the
//! engine's accumulator never holds NaN or infinity.

mod engine;
mod operations;

pub use engine::Engine;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Operand handed to the engine was NaN or infinite
    #[error("Non-finite operand: {0}")]
    NonFiniteOperand(f64),
}
