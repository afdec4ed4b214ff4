//! Interpreter for a small imperative scripting language.
//!
//! Source text is lexed, parsed into a tree and walked against one flat
//! variable table. Everything the program prints is collected and returned:
//!
//! ```
//! let output = rusty_npl::interpret("for (i = 0; i < 3; i++) { print(i, end=\" \"); }").unwrap();
//! assert_eq!(output, "0 1 2 ");
//! ```

pub mod frontend;
pub mod treewalk;

use frontend::grammar::Program;
use frontend::{LexError, Parser, ParserError};
use treewalk::{Interpreter, InterpreterError};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NplError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(ParserError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] InterpreterError),
}

pub type NplResult<T> = Result<T, NplError>;

impl From<ParserError> for NplError {
    fn from(error: ParserError) -> Self {
        match error {
            ParserError::Lex(e) => NplError::Lex(e),
            other => NplError::Parse(other),
        }
    }
}

/// Parses a whole program without running it.
pub fn parse(source: &str) -> NplResult<Program> {
    let program = Parser::new(source).parse()?;
    log::debug!("parsed {} top-level statements", program.stmts.len());

    #[cfg(feature = "print-ast")]
    log::debug!("program tree:\n{}", program.ast_string());

    Ok(program)
}

/// Runs a program and returns its printed output. Any error discards the output.
pub fn interpret(source: &str) -> NplResult<String> {
    let program = parse(source)?;

    let mut interpreter = Interpreter::new();
    interpreter.eval_program(&program)?;

    let output = interpreter.into_output();
    log::debug!("program finished with {} bytes of output", output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::span::CodePosition;

    #[test]
    fn test_interpret() {
        assert_eq!(interpret("x = 5; print(x);"), Ok("5\n".to_owned()));
        assert_eq!(interpret(""), Ok(String::new()));
    }

    #[test]
    fn test_error_layers() {
        assert_eq!(
            interpret("x = 1 ~ 2;"),
            Err(NplError::Lex(LexError::UnexpectedCharacter {
                character: '~',
                position: CodePosition::new(6, 1, 7),
            }))
        );
        assert!(matches!(interpret("print(1)"), Err(NplError::Parse(_))));
        assert_eq!(
            interpret("print(\"partial\"); print(y);"),
            Err(NplError::Runtime(InterpreterError::UndefinedVariable(
                "y".to_owned()
            )))
        );
    }

    #[test]
    fn test_error_messages() {
        let message = interpret("print(1 < \"a\");").unwrap_err().to_string();
        assert_eq!(
            message,
            "Runtime error: Unsupported operation '<' between number and text"
        );

        let message = interpret("if (1) {\n  print(2)\n}").unwrap_err().to_string();
        assert_eq!(message, "Parse error: Expected ';' at 3:1, but got '}'");
    }

    #[test]
    fn test_runs_are_independent() {
        assert_eq!(interpret("x = 1; print(x);"), Ok("1\n".to_owned()));
        assert!(interpret("print(x);").is_err());
    }
}
