//! Recursive-descent parsing of typed values
//!
//! Grammar, one value per call:
//!
//! ```text
//! value   := vector | text
//! vector  := '[' ws* (value ws*)* ']'
//! text    := quoted+ | bare
//! quoted  := '"' (escape | [^"\\])* '"'
//! bare    := (escape | [^\s\]\\])+
//! escape  := '\\' any
//! ```
//!
//! Adjacent quoted segments concatenate: `"Zero""One"` decodes to `ZeroOne`.

use std::str::FromStr;

use super::Value;
use super::cursor::Cursor;
use super::scanner::{PointOfInterest, is_plain_whitespace};
use crate::error::ParseError;

/// Decode one quoted or bare token as text.
///
/// Skips leading whitespace first. Fails with [`ParseError::Missing`] when
/// no token remains.
pub fn parse_text(cursor: &mut Cursor<'_>, type_name: &str) -> Result<String, ParseError> {
    match cursor.skip_whitespace() {
        PointOfInterest::End => Err(ParseError::Missing),
        PointOfInterest::Quote => parse_quoted(cursor),
        PointOfInterest::CloseBracket => Err(ParseError::UnexpectedCloseBracket {
            type_name: type_name.to_string(),
            input: cursor.snapshot(),
        }),
        PointOfInterest::Word | PointOfInterest::OpenBracket => parse_bare(cursor),
    }
}

/// Decode one token and convert it with the type's `FromStr`
pub fn parse_scalar<T: FromStr>(cursor: &mut Cursor<'_>, type_name: &str) -> Result<T, ParseError> {
    let text = parse_text(cursor, type_name)?;
    text.parse::<T>()
        .map_err(|_| ParseError::invalid_value(type_name, text, cursor.input()))
}

/// Decode a token that must be exactly one character
pub fn parse_char(cursor: &mut Cursor<'_>) -> Result<char, ParseError> {
    let text = parse_text(cursor, "Char")?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ParseError::invalid_value("Char", text, cursor.input())),
    }
}

/// Decode a boolean: `true`/`false` in any ASCII case, or `1`/`0`
pub fn parse_bool(cursor: &mut Cursor<'_>) -> Result<bool, ParseError> {
    let text = parse_text(cursor, "Boolean")?;
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Ok(false)
    } else {
        Err(ParseError::invalid_value("Boolean", text, cursor.input()))
    }
}

/// Decode a bracketed vector, recursing into `T` for every element
pub fn parse_vector<T: Value>(cursor: &mut Cursor<'_>) -> Result<Vec<T>, ParseError> {
    match cursor.skip_whitespace() {
        PointOfInterest::End => return Err(ParseError::Missing),
        PointOfInterest::OpenBracket => {
            cursor.bump();
        }
        _ => {
            return Err(ParseError::ExpectedVector {
                type_name: <Vec<T>>::type_name(),
                input: cursor.snapshot(),
            });
        }
    }

    let mut items = Vec::new();
    loop {
        match cursor.skip_whitespace() {
            PointOfInterest::End => {
                return Err(ParseError::UnterminatedVector {
                    input: cursor.snapshot(),
                });
            }
            PointOfInterest::CloseBracket => {
                cursor.bump();
                return Ok(items);
            }
            _ => items.push(T::parse(cursor)?),
        }
    }
}

fn parse_quoted(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let mut text = String::new();

    while cursor.peek() == Some('"') {
        cursor.bump();
        loop {
            match cursor.bump() {
                None => {
                    return Err(ParseError::UnterminatedQuote {
                        input: cursor.snapshot(),
                    });
                }
                Some('"') => break,
                Some('\\') => text.push(parse_escape(cursor)?),
                Some(ch) => text.push(ch),
            }
        }
    }

    Ok(text)
}

fn parse_bare(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let mut text = String::new();

    while let Some(ch) = cursor.peek() {
        if is_plain_whitespace(ch) || ch == ']' {
            break;
        }
        cursor.bump();
        if ch == '\\' {
            text.push(parse_escape(cursor)?);
        } else {
            text.push(ch);
        }
    }

    Ok(text)
}

/// Character following a consumed backslash, taken literally
fn parse_escape(cursor: &mut Cursor<'_>) -> Result<char, ParseError> {
    cursor.bump().ok_or_else(|| ParseError::DanglingEscape {
        input: cursor.snapshot(),
    })
}
