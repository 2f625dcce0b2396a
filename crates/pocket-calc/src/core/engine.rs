//! Immediate-evaluation calculator engine
//!
//! Holds an accumulator and at most one pending operator. A second
//! operator press resolves the pending one first, so `2 + 3 ×` yields
//! `5` before waiting for the next operand.

use tracing::{debug, warn};

use crate::core::{CalcError, CalcResult, Operation};

/// The calculator state machine
///
/// Every failed operation leaves the state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    /// Left operand of the pending operation, always finite
    accumulator: f64,
    /// Operator entered but not yet applied
    pending_operator: Option<Operation>,
}

impl Engine {
    /// Creates an engine in its initial state (`0`, no pending operator)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored left operand
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// Records an operator press with the currently displayed operand
    ///
    /// Returns `Ok(None)` for the first operator in a chain. When an
    /// operator is already pending it is applied first and the new
    /// running total is returned for display.
    pub fn set_operation(&mut self, operand: f64, op: Operation) -> CalcResult<Option<f64>> {
        let operand = Self::check_operand(operand)?;

        let Some(pending) = self.pending_operator else {
            debug!(operand, op = %op, "operator pending");
            self.accumulator = operand;
            self.pending_operator = Some(op);
            return Ok(None);
        };

        let result = self.resolve(pending, operand)?;
        debug!(result, op = %op, "chained operator resolved");
        self.accumulator = result;
        self.pending_operator = Some(op);
        Ok(Some(result))
    }

    /// Applies the pending operator to the displayed operand (`=`)
    ///
    /// Returns `Ok(None)` when no operator is pending, including a second
    /// `=` in a row.
    pub fn calculate_result(&mut self, operand: f64) -> CalcResult<Option<f64>> {
        let Some(pending) = self.pending_operator else {
            return Ok(None);
        };
        let operand = Self::check_operand(operand)?;

        let result = self.resolve(pending, operand)?;
        debug!(result, "result computed");
        self.accumulator = result;
        self.pending_operator = None;
        Ok(Some(result))
    }

    /// Resets to the initial state
    pub fn clear_all(&mut self) {
        debug!("engine cleared");
        *self = Self::new();
    }

    /// Sign change (±). Does not touch engine state.
    #[must_use]
    pub fn plus_minus(value: f64) -> f64 {
        -value
    }

    /// Percent (%). Does not touch engine state.
    #[must_use]
    pub fn percent(value: f64) -> f64 {
        value / 100.0
    }

    fn resolve(&self, op: Operation, operand: f64) -> CalcResult<f64> {
        op.apply(self.accumulator, operand).map_err(|err| {
            warn!(accumulator = self.accumulator, operand, op = %op, %err, "arithmetic rejected");
            err
        })
    }

    fn check_operand(operand: f64) -> CalcResult<f64> {
        if operand.is_finite() {
            Ok(operand)
        } else {
            Err(CalcError::NonFiniteOperand(operand))
        }
    }
}
