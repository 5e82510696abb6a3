// src/parser.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `column` is 1-based and counts characters, not bytes.
    #[error("<stdin>:1:{column}: error: {message}")]
    InvalidSyntax { column: usize, message: String },
}

/// Character cursor over a single input line.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Consume `-?[0-9]+\.?[0-9]*` and return the exact text span.
    pub fn parse_number_literal(&mut self) -> Result<&'a str, ParseError> {
        let start = self.i;
        self.consume_char('-');
        if self.skip_digits() == 0 {
            self.i = start;
            return Err(self.error("number expected"));
        }
        if self.consume_char('.') {
            self.skip_digits();
        }
        Ok(&self.s[start..self.i])
    }

    /// True when the cursor sits on something `parse_number_literal` accepts.
    pub fn at_number(&self) -> bool {
        let mut rest = self.s[self.i..].chars();
        match rest.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Consume one of `chars` and return it.
    pub fn one_of(&mut self, chars: &[char]) -> Option<char> {
        let c = self.peek_char()?;
        if chars.contains(&c) {
            self.i += c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    pub fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{c}'")))
        }
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Build an error pointing at the current position.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::InvalidSyntax {
            column: self.s[..self.i].chars().count() + 1,
            message: message.into(),
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }
        self.i - start
    }
}
