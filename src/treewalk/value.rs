use crate::frontend::grammar::Literal;

use std::fmt;

/// How `none` renders when printed or concatenated.
pub const NONE_STR: &str = "none";

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Number(f64),
    Text(String),
    None,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueKind {
    Number,
    Text,
    None,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::None => ValueKind::None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::None => false,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Booleans have no runtime kind of their own.
    pub fn from_bool(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Boolean(b) => Value::from_bool(*b),
            Literal::Str(s) => Value::Text(s.clone()),
            Literal::None => Value::None,
        }
    }
}

/// Text used by `print` and string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::None => f.write_str(NONE_STR),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::None => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Number(2.0).is_truthy());
        assert!(Value::Number(-0.5).is_truthy());
        assert!(Value::Number(f64::NAN).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(Value::Text("x".to_owned()).is_truthy());
        assert!(!Value::Text(String::new()).is_truthy());
        assert!(!Value::None.is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(1.0 / 3.0).to_string(), "0.3333333333333333");
        assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Text("raw \"text\"".to_owned()).to_string(), "raw \"text\"");
        assert_eq!(Value::None.to_string(), "none");
    }

    #[test]
    fn test_literals() {
        assert_eq!(Value::from(&Literal::Boolean(true)), Value::Number(1.0));
        assert_eq!(Value::from(&Literal::Boolean(false)), Value::Number(0.0));
        assert_eq!(Value::from(&Literal::None), Value::None);
        assert_eq!(Value::from(&Literal::None).kind(), ValueKind::None);
        assert_eq!(ValueKind::Text.to_string(), "text");
    }
}
