//! Typed values understood by the console
//!
//! A type takes part in parsing by implementing [`Value`]. The closed set
//! of primitives is registered here; `Vec<T>` is supported whenever `T` is,
//! to any nesting depth. Further scalar types can be registered with the
//! [`value_type!`](crate::value_type) macro.

mod cursor;
mod parser;
mod scanner;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use parser::{parse_bool, parse_char, parse_scalar, parse_text, parse_vector};
pub use scanner::{
    PointOfInterest, end_of_input, has_token, is_plain_whitespace, next_point_of_interest,
};

use crate::error::ParseError;

/// A type the parser knows how to decode from an input line
pub trait Value: Sized {
    /// Human-readable type name shown in help text
    fn type_name() -> String;

    /// Consume exactly one value from the cursor
    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError>;

    /// Render the value the way it would be typed
    fn render(&self) -> String;
}

/// Registry entry describing a supported type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    /// Display name, e.g. `Vector_Of_Signed_Int`
    pub display_name: String,
}

impl RegisteredType {
    /// Types only get an entry by implementing [`Value`]
    pub fn is_supported(&self) -> bool {
        true
    }
}

/// Look up the registry entry for `T`
pub fn registered_type<T: Value>() -> RegisteredType {
    RegisteredType {
        display_name: T::type_name(),
    }
}

/// Register a `FromStr + Display` type as a parseable scalar.
///
/// ```rust
/// use argot_core::{Value, value_type};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Port(u16);
///
/// impl std::str::FromStr for Port {
///     type Err = std::num::ParseIntError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.parse().map(Port)
///     }
/// }
///
/// impl std::fmt::Display for Port {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// value_type!(Port, "Port");
///
/// assert_eq!(<Vec<Port>>::type_name(), "Vector_Of_Port");
/// ```
#[macro_export]
macro_rules! value_type {
    ($ty:ty, $name:expr) => {
        impl $crate::value::Value for $ty {
            fn type_name() -> ::std::string::String {
                ::std::string::String::from($name)
            }

            fn parse(
                cursor: &mut $crate::value::Cursor<'_>,
            ) -> ::std::result::Result<Self, $crate::error::ParseError> {
                $crate::value::parse_scalar::<Self>(cursor, $name)
            }

            fn render(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(self)
            }
        }
    };
}

value_type!(u8, "Unsigned_Char");
value_type!(i8, "Signed_Char");
value_type!(i16, "Signed_Short");
value_type!(u16, "Unsigned_Short");
value_type!(i32, "Signed_Int");
value_type!(u32, "Unsigned_Int");
value_type!(i64, "Signed_Long");
value_type!(u64, "Unsigned_Long");
value_type!(i128, "Signed_Long_Long");
value_type!(u128, "Unsigned_Long_Long");
value_type!(isize, "Signed_Size");
value_type!(usize, "Unsigned_Size");
value_type!(f32, "Float");
value_type!(f64, "Double");

impl Value for String {
    fn type_name() -> String {
        "String".to_string()
    }

    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        parse_text(cursor, "String")
    }

    fn render(&self) -> String {
        render_text(self)
    }
}

impl Value for bool {
    fn type_name() -> String {
        "Boolean".to_string()
    }

    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        parse_bool(cursor)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Value for char {
    fn type_name() -> String {
        "Char".to_string()
    }

    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        parse_char(cursor)
    }

    fn render(&self) -> String {
        render_text(&self.to_string())
    }
}

impl<T: Value> Value for Vec<T> {
    fn type_name() -> String {
        format!("Vector_Of_{}", T::type_name())
    }

    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        parse_vector(cursor)
    }

    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Value::render).collect();
        format!("[{}]", items.join(" "))
    }
}

/// Render text so that parsing it back yields the same string
fn render_text(text: &str) -> String {
    let plain = !text.is_empty()
        && !text
            .chars()
            .any(|ch| is_plain_whitespace(ch) || matches!(ch, '"' | '\\' | '[' | ']'));
    if plain {
        return text.to_string();
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
