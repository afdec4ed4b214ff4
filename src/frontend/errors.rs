use super::span::{CodePosition, Span};
use super::token::Token;

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected character '{character}' at {position}")]
    UnexpectedCharacter {
        character: char,
        position: CodePosition,
    },
}

pub type LexResult<T> = Result<T, LexError>;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Token(Token),
    Expression,
    Identifier,
    StringLiteral,
    UpdateClause,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Expected {expected} at {span}, but got {got}")]
    Unexpected {
        expected: Item,
        got: Token,
        span: Span,
    },
}

pub type ParserResult<T> = Result<T, ParserError>;

impl ParserError {
    pub fn unexpected(expected: Item, got: &Token, span: Span) -> Self {
        ParserError::Unexpected {
            expected,
            got: got.clone(),
            span,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::Token(token) => write!(f, "{}", token),
            Item::Expression => write!(f, "expression"),
            Item::Identifier => write!(f, "identifier"),
            Item::StringLiteral => write!(f, "string literal"),
            Item::UpdateClause => write!(f, "'++', '--' or '='"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let position = CodePosition::new(9, 2, 3);
        let lex_error = LexError::UnexpectedCharacter {
            character: '$',
            position,
        };
        assert_eq!(lex_error.to_string(), "Unexpected character '$' at 2:3");

        let parse_error = ParserError::unexpected(
            Item::Token(Token::Semicolon),
            &Token::RightBrace,
            Span::new(position, position),
        );
        assert_eq!(parse_error.to_string(), "Expected ';' at 2:3, but got '}'");

        let wrapped: ParserError = lex_error.clone().into();
        assert_eq!(wrapped.to_string(), lex_error.to_string());
    }
}
