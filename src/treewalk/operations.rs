//! Binary operator semantics, keyed on the kinds of both operands.

use super::errors::{InterpreterError, RuntimeResult};
use super::value::Value;
use crate::frontend::grammar::BinaryOperator;

/// Applies `op` to two already evaluated operands.
pub fn eval_binary(op: BinaryOperator, lhs: Value, rhs: Value) -> RuntimeResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(numerical_binop(op, a, b)),
        (Value::Text(a), Value::Text(b))
            if matches!(op, BinaryOperator::EqualTo | BinaryOperator::NotEqualTo) =>
        {
            let equal = a == b;
            Ok(Value::from_bool(equal == (op == BinaryOperator::EqualTo)))
        }
        (lhs, rhs) if op == BinaryOperator::Add && (lhs.is_text() || rhs.is_text()) => {
            Ok(Value::Text(format!("{}{}", lhs, rhs)))
        }
        (lhs, rhs) => Err(InterpreterError::IllegalBinaryOperation(
            op,
            lhs.kind(),
            rhs.kind(),
        )),
    }
}

/// Every operator is defined on numbers. IEEE results such as `inf` and `NaN` pass through.
fn numerical_binop(op: BinaryOperator, a: f64, b: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Number(a + b),
        BinaryOperator::Subtract => Value::Number(a - b),
        BinaryOperator::Multiply => Value::Number(a * b),
        BinaryOperator::Divide => Value::Number(a / b),
        BinaryOperator::EqualTo => Value::from_bool(a == b),
        BinaryOperator::NotEqualTo => Value::from_bool(a != b),
        BinaryOperator::GreaterThan => Value::from_bool(a > b),
        BinaryOperator::GreaterEq => Value::from_bool(a >= b),
        BinaryOperator::LessThan => Value::from_bool(a < b),
        BinaryOperator::LessEq => Value::from_bool(a <= b),
        BinaryOperator::And => Value::from_bool(a != 0.0 && b != 0.0),
        BinaryOperator::Or => Value::from_bool(a != 0.0 || b != 0.0),
    }
}
