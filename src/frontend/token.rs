use super::span::Span;

use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    Asterisk,
    Slash,

    // One or two character tokens.
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Equals,
    DoubleEq,
    BangEq,
    LeftAngle,
    LeftAngleEq,
    RightAngle,
    RightAngleEq,

    // Literals.
    Identifier(String),
    String(String),
    Number(f64),

    // Keywords.
    And,
    Else,
    End,
    False,
    For,
    If,
    None,
    Or,
    Print,
    True,
    While,

    Unrecognized(char),
    EndOfFile,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl Token {
    /// Maps an identifier-shaped lexeme to its keyword, if it is one.
    pub fn keyword(lexeme: &str) -> Option<Token> {
        let token = match lexeme {
            "and" => Token::And,
            "else" => Token::Else,
            "end" => Token::End,
            "false" => Token::False,
            "for" => Token::For,
            "if" => Token::If,
            "none" => Token::None,
            "or" => Token::Or,
            "print" => Token::Print,
            "true" => Token::True,
            "while" => Token::While,
            _ => return None,
        };
        Some(token)
    }

    /// Literal source text of fixed tokens.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Plus => "+",
            Token::PlusPlus => "++",
            Token::Minus => "-",
            Token::MinusMinus => "--",
            Token::Equals => "=",
            Token::DoubleEq => "==",
            Token::BangEq => "!=",
            Token::LeftAngle => "<",
            Token::LeftAngleEq => "<=",
            Token::RightAngle => ">",
            Token::RightAngleEq => ">=",
            Token::And => "and",
            Token::Else => "else",
            Token::End => "end",
            Token::False => "false",
            Token::For => "for",
            Token::If => "if",
            Token::None => "none",
            Token::Or => "or",
            Token::Print => "print",
            Token::True => "true",
            Token::While => "while",
            Token::Identifier(_)
            | Token::String(_)
            | Token::Number(_)
            | Token::Unrecognized(_)
            | Token::EndOfFile => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::String(s) => write!(f, "string {:?}", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Unrecognized(ch) => write!(f, "unrecognized character '{}'", ch),
            Token::EndOfFile => write!(f, "end of input"),
            fixed => match fixed.symbol() {
                Some(symbol) => write!(f, "'{}'", symbol),
                None => write!(f, "{:?}", fixed),
            },
        }
    }
}
