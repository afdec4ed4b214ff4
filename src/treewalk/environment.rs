use super::errors::{InterpreterError, RuntimeResult};
use super::value::Value;
use std::collections::HashMap;

/// The single flat variable table of a program run.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    /// Add or replace current definition.
    pub fn define(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    /// Get variable value.
    pub fn get(&self, name: &str) -> RuntimeResult<Value> {
        match self.values.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(InterpreterError::UndefinedVariable(name.to_owned())),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
