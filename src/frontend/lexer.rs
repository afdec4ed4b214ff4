use super::cursor::Cursor;
use super::errors::{LexError, LexResult};
use super::span::Span;
use super::token::{SpannedToken, Token};

pub struct Lexer<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token. Keeps returning `EndOfFile` once the source is exhausted.
    pub fn next_token(&mut self) -> SpannedToken {
        // Get rid of whitespace.
        self.cursor.take_while(char::is_whitespace);

        let start_pos = self.cursor.get_position();
        let token = self.lex_token();
        let end_pos = self.cursor.get_position();

        SpannedToken {
            token,
            span: Span::new(start_pos, end_pos),
        }
    }

    fn lex_token(&mut self) -> Token {
        let (byte_idx, ch) = match self.cursor.take() {
            Some(t) => t,
            None => return Token::EndOfFile,
        };

        match ch {
            // Single-character tokens.
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '*' => Token::Asterisk,
            '/' => Token::Slash,

            // Potentially two character tokens.
            '+' => self.look_for(Token::Plus, '+', Token::PlusPlus),
            '-' => self.look_for(Token::Minus, '-', Token::MinusMinus),
            '=' => self.look_for(Token::Equals, '=', Token::DoubleEq),
            '<' => self.look_for(Token::LeftAngle, '=', Token::LeftAngleEq),
            '>' => self.look_for(Token::RightAngle, '=', Token::RightAngleEq),
            '!' => self.look_for(Token::Unrecognized('!'), '=', Token::BangEq),

            // String literals.
            '"' | '\'' => self.lex_string(ch),

            // Numbers.
            _ if ch.is_ascii_digit() => self.lex_number(byte_idx),

            // Identifiers.
            _ if ch.is_alphabetic() || ch == '_' => self.lex_identifier_or_kw(byte_idx),

            _ => Token::Unrecognized(ch),
        }
    }

    /// Checks if next char is `second`. If so, consume it and return `double`.
    /// Otherwise, return `single`.
    fn look_for(&mut self, single: Token, second: char, double: Token) -> Token {
        if self.cursor.take_if(second) {
            double
        } else {
            single
        }
    }

    /// Scans a string up to the matching quote, resolving escapes.
    /// An unclosed string runs to the end of the source.
    fn lex_string(&mut self, quote: char) -> Token {
        let mut string = String::new();

        while let Some((_, ch)) = self.cursor.take() {
            match ch {
                _ if ch == quote => break,
                '\\' => match self.cursor.take() {
                    Some((_, escaped)) => string.push(unescape(escaped)),
                    None => break,
                },
                _ => string.push(ch),
            }
        }

        Token::String(string)
    }

    /// Scans a number and returns it. A trailing `.` without digits belongs to the number.
    fn lex_number(&mut self, start_idx: usize) -> Token {
        self.cursor.take_while(|ch| ch.is_ascii_digit());
        if self.cursor.take_if('.') {
            self.cursor.take_while(|ch| ch.is_ascii_digit());
        }

        let end_idx = self.cursor.offset();
        let scanned_number = &self.source[start_idx..end_idx];
        let parsed: Result<f64, _> = scanned_number.parse();
        debug_assert!(parsed.is_ok(), "digit run {scanned_number:?} must parse");
        Token::Number(parsed.unwrap_or_default())
    }

    /// Scan up to end of lexeme and return it as identifier. Checks for keywords.
    fn lex_identifier_or_kw(&mut self, start_idx: usize) -> Token {
        self.cursor.take_while(|ch| ch.is_alphanumeric() || ch == '_');

        let end_idx = self.cursor.offset();
        let lexeme = &self.source[start_idx..end_idx];
        Token::keyword(lexeme).unwrap_or_else(|| Token::Identifier(lexeme.to_owned()))
    }

    /// Returns an iterator version of lexer.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator { lexer: self }
    }
}

fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next_token();

        if token.token == Token::EndOfFile {
            return None;
        }

        Some(token)
    }
}

/// Lexes the whole source, failing on the first unrecognized character.
pub fn tokenize(source: &str) -> LexResult<Vec<SpannedToken>> {
    Lexer::new(source)
        .iter()
        .map(|spanned| match spanned.token {
            Token::Unrecognized(ch) => Err(LexError::UnexpectedCharacter {
                character: ch,
                position: spanned.span.start_pos,
            }),
            _ => Ok(spanned),
        })
        .collect()
}
