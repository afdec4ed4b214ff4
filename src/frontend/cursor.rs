use super::span::CodePosition;
use std::iter::Peekable;
use std::str::CharIndices;

/// Character stream over the source that tracks line and column.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    char_iterator: Peekable<CharIndices<'src>>,
    position: CodePosition,
}

impl<'src> Cursor<'src> {
    /// Creates a character stream for the source string.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            char_iterator: source.char_indices().peekable(),
            position: CodePosition::default(),
        }
    }

    /// Position of the cursor.
    pub fn get_position(&self) -> CodePosition {
        self.position
    }

    /// Peeks the next character without consuming it.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.char_iterator.peek().copied()
    }

    /// Consumes the next character.
    pub fn take(&mut self) -> Option<(usize, char)> {
        let (byte_idx, ch) = self.char_iterator.next()?;

        self.position.byte_pos = self.peek().map(|(idx, _)| idx).unwrap_or(self.source.len());
        if ch == '\n' {
            self.position.line_no += 1;
            self.position.column_no = 1;
        } else {
            self.position.column_no += 1;
        }

        Some((byte_idx, ch))
    }

    /// Consumes the next character if it equals target char.
    pub fn take_if(&mut self, target: char) -> bool {
        match self.peek() {
            Some((_, ch)) if ch == target => {
                self.take();
                true
            }
            _ => false,
        }
    }

    /// Consumes next characters as long as they meet condition.
    /// At the end, the next character fails condition.
    pub fn take_while<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some((_, ch)) = self.peek() {
            if !condition(ch) {
                break;
            }
            self.take();
        }
    }

    /// Byte offset of the next character, or the source length at the end.
    pub fn offset(&mut self) -> usize {
        match self.peek() {
            Some((idx, _)) => idx,
            None => self.source.len(),
        }
    }
}
