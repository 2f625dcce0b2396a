//! Property-based tests for the calculator engine
//!
//! Immediate evaluation must agree with plain `f64` arithmetic, and
//! failed operations must never disturb engine state.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use pocket_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any operator
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Generate operands small enough that no operator overflows
fn operand_strategy() -> impl Strategy<Value = f64> {
    -1e100f64..1e100f64
}

fn direct(a: f64, op: Operation, b: f64) -> f64 {
    match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => a / b,
    }
}

// ===== Single operation =====

proptest! {
    /// `a op =b` computes the same value as `a op b`
    #[test]
    fn prop_set_then_calculate_matches_direct(
        a in operand_strategy(),
        b in operand_strategy(),
        op in operation_strategy(),
    ) {
        prop_assume!(!(op == Operation::Divide && b == 0.0));
        let mut engine = Engine::new();
        prop_assert_eq!(engine.set_operation(a, op), Ok(None));
        prop_assert_eq!(engine.calculate_result(b), Ok(Some(direct(a, op, b))));
        prop_assert_eq!(engine.pending_operator(), None);
    }

    /// Chains evaluate strictly left to right
    #[test]
    fn prop_chain_is_left_to_right(
        a in -1e6f64..1e6f64,
        b in -1e6f64..1e6f64,
        c in -1e6f64..1e6f64,
        first in operation_strategy(),
        second in operation_strategy(),
    ) {
        prop_assume!(!(first == Operation::Divide && b == 0.0));
        prop_assume!(!(second == Operation::Divide && c == 0.0));

        let mut engine = Engine::new();
        engine.set_operation(a, first).unwrap();
        let partial = direct(a, first, b);
        prop_assert_eq!(engine.set_operation(b, second), Ok(Some(partial)));
        prop_assert_eq!(engine.calculate_result(c), Ok(Some(direct(partial, second, c))));
    }

    /// Nothing pending means nothing to compute
    #[test]
    fn prop_calculate_without_operator_is_none(x in operand_strategy()) {
        let mut engine = Engine::new();
        prop_assert_eq!(engine.calculate_result(x), Ok(None));
    }

    /// Clearing drops any pending operator
    #[test]
    fn prop_clear_drops_pending(
        a in operand_strategy(),
        b in operand_strategy(),
        op in operation_strategy(),
    ) {
        let mut engine = Engine::new();
        engine.set_operation(a, op).unwrap();
        engine.clear_all();
        prop_assert_eq!(engine.calculate_result(b), Ok(None));
        prop_assert_eq!(engine.accumulator(), 0.0);
    }

    /// Division by zero fails without touching state
    #[test]
    fn prop_division_by_zero_is_atomic(a in operand_strategy(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        let mut engine = Engine::new();
        engine.set_operation(a, Operation::Divide).unwrap();
        let before = engine.clone();

        prop_assert_eq!(engine.calculate_result(zero), Err(CalcError::DivisionByZero));
        prop_assert_eq!(&engine, &before);
        prop_assert_eq!(
            engine.set_operation(zero, Operation::Add),
            Err(CalcError::DivisionByZero)
        );
        prop_assert_eq!(&engine, &before);
    }

    /// The accumulator stays finite whatever the operands
    #[test]
    fn prop_accumulator_stays_finite(
        values in proptest::collection::vec(any::<f64>(), 1..20),
        ops in proptest::collection::vec(operation_strategy(), 1..20),
    ) {
        let mut engine = Engine::new();
        for (value, op) in values.iter().zip(ops.iter()) {
            let _ = engine.set_operation(*value, *op);
            prop_assert!(engine.accumulator().is_finite());
        }
        let _ = engine.calculate_result(values[0]);
        prop_assert!(engine.accumulator().is_finite());
    }

    /// Sign change is an involution
    #[test]
    fn prop_plus_minus_involution(x in any::<f64>()) {
        prop_assume!(x.is_finite());
        prop_assert_eq!(Engine::plus_minus(Engine::plus_minus(x)), x);
    }

    /// Percent divides by one hundred
    #[test]
    fn prop_percent_divides_by_hundred(x in operand_strategy()) {
        prop_assert_eq!(Engine::percent(x), x / 100.0);
    }
}

// ===== Documented examples =====

#[test]
fn test_chaining_example() {
    let mut engine = Engine::new();
    assert_eq!(engine.set_operation(2.0, Operation::Add), Ok(None));
    assert_eq!(engine.set_operation(3.0, Operation::Multiply), Ok(Some(5.0)));
    assert_eq!(engine.calculate_result(4.0), Ok(Some(20.0)));
}

#[test]
fn test_unary_examples() {
    assert_eq!(Engine::plus_minus(5.0), -5.0);
    assert_eq!(Engine::plus_minus(-5.0), 5.0);
    assert_eq!(Engine::percent(50.0), 0.5);
}

#[test]
fn test_division_by_zero_example() {
    let mut engine = Engine::new();
    engine.set_operation(10.0, Operation::Divide).unwrap();
    assert_eq!(engine.calculate_result(0.0), Err(CalcError::DivisionByZero));
    assert_eq!(engine.accumulator(), 10.0);
    assert_eq!(engine.pending_operator(), Some(Operation::Divide));
}
