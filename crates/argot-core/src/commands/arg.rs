//! Argument slots

use tracing::trace;

use crate::error::ArgumentError;
use crate::value::{Cursor, Value};

/// One declared, optionally defaulted parameter of a command.
///
/// Parsing returns the value instead of storing it, so a slot holds no
/// per-invocation state.
#[derive(Debug, Clone)]
pub struct Arg<T> {
    name: String,
    default: Option<T>,
}

impl<T: Value + Clone> Arg<T> {
    /// Create a required argument
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Create an argument used when the line runs out of tokens
    pub fn with_default(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }

    /// Argument name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default value, if any
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Bind this slot from the cursor.
    ///
    /// When no token remains the default is returned without touching the
    /// cursor; without a default the slot is reported missing.
    pub fn parse(&self, cursor: &mut Cursor<'_>) -> Result<T, ArgumentError> {
        if !cursor.has_token() {
            return match &self.default {
                Some(value) => {
                    trace!(slot = %self.name, "using default value");
                    Ok(value.clone())
                }
                None => Err(ArgumentError::missing(&self.name)),
            };
        }

        trace!(slot = %self.name, offset = cursor.offset(), "parsing argument");
        T::parse(cursor).map_err(|err| ArgumentError::from_parse(&self.name, err))
    }

    /// Usage fragment: ` [name:Type]` or ` [name:Type:default=value]`
    pub fn info(&self) -> String {
        match &self.default {
            Some(value) => format!(" [{}:{}:default={}]", self.name, T::type_name(), value.render()),
            None => format!(" [{}:{}]", self.name, T::type_name()),
        }
    }
}

/// Trailing slot every command checks after its declared arguments.
///
/// It owns no value; it only rejects input that still holds a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfArguments;

impl EndOfArguments {
    /// Fail with `TooManyArguments` if anything but whitespace remains
    pub fn parse(&self, cursor: &Cursor<'_>) -> Result<(), ArgumentError> {
        if cursor.has_token() {
            return Err(ArgumentError::too_many(cursor.input()));
        }
        Ok(())
    }
}
