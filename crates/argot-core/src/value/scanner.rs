//! Point-of-interest scanner
//!
//! Stateless helpers that locate the next token boundary in a raw line.
//! "No more tokens" is always expressed as
//! `next_point_of_interest(input, from).0 == end_of_input(input)`.

/// Token separator: space, tab, newline, carriage return, vertical tab or
/// form feed. Other Unicode spaces (e.g. U+00A0) are ordinary characters.
#[inline]
pub fn is_plain_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// What sits at a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOfInterest {
    /// Any other printable, non-whitespace character
    Word,
    /// An opening `"`
    Quote,
    /// An opening `[`
    OpenBracket,
    /// A closing `]`
    CloseBracket,
    /// Nothing but whitespace remains
    End,
}

impl PointOfInterest {
    fn classify(ch: char) -> Self {
        match ch {
            '"' => Self::Quote,
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            _ => Self::Word,
        }
    }
}

/// Find the next non-whitespace position at or after `from`.
///
/// `from` must lie on a char boundary; values past the end are clamped.
pub fn next_point_of_interest(input: &str, from: usize) -> (usize, PointOfInterest) {
    let from = from.min(input.len());
    input[from..]
        .char_indices()
        .find(|(_, ch)| !is_plain_whitespace(*ch))
        .map(|(offset, ch)| (from + offset, PointOfInterest::classify(ch)))
        .unwrap_or((input.len(), PointOfInterest::End))
}

/// Position one past the last byte of `input`
#[inline]
pub fn end_of_input(input: &str) -> usize {
    input.len()
}

/// Whether another token starts at or after `from`
#[inline]
pub fn has_token(input: &str, from: usize) -> bool {
    next_point_of_interest(input, from).0 != end_of_input(input)
}
