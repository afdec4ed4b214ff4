use super::value::ValueKind;
use crate::frontend::grammar::{BinaryOperator, UpdateOperator};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpreterError {
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("Unsupported operation '{0}' between {1} and {2}")]
    IllegalBinaryOperation(BinaryOperator, ValueKind, ValueKind),
    #[error("Unsupported operation '{op}' on {}", update_target(.name, .kind))]
    IllegalUpdate {
        op: UpdateOperator,
        name: String,
        kind: Option<ValueKind>,
    },
}

pub type RuntimeResult<T> = Result<T, InterpreterError>;

fn update_target(name: &str, kind: &Option<ValueKind>) -> String {
    match kind {
        Some(kind) => format!("{} variable '{}'", kind, name),
        None => format!("undefined variable '{}'", name),
    }
}
