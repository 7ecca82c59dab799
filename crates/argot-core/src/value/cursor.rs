//! Read-only view over an input line with a forward-only offset

use super::scanner::{PointOfInterest, has_token, next_point_of_interest};

/// A borrowed input line plus the offset parsing has reached.
///
/// The offset only ever moves forward and always sits on a char boundary
/// within `0..=input.len()`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// The full, unmodified input line
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unconsumed part of the input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Whether every byte has been consumed
    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the next character
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Kind of the next point of interest, without moving
    pub fn point_of_interest(&self) -> PointOfInterest {
        next_point_of_interest(self.input, self.offset).1
    }

    /// Move to the next point of interest and report its kind
    pub fn skip_whitespace(&mut self) -> PointOfInterest {
        let (position, kind) = next_point_of_interest(self.input, self.offset);
        self.offset = position;
        kind
    }

    /// Whether another token follows the current offset
    pub fn has_token(&self) -> bool {
        has_token(self.input, self.offset)
    }

    /// Owned copy of the input line for error payloads
    pub(crate) fn snapshot(&self) -> String {
        self.input.to_string()
    }
}
