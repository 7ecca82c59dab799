//! Constructor methods for error types

use super::types::{ArgotError, ArgumentError, CommandError, ParseError};

impl ParseError {
    /// The full input line the error was raised against, if any
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::UnterminatedQuote { input }
            | Self::UnterminatedVector { input }
            | Self::DanglingEscape { input }
            | Self::ExpectedVector { input, .. }
            | Self::UnexpectedCloseBracket { input, .. }
            | Self::InvalidValue { input, .. } => Some(input),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        type_name: impl Into<String>,
        text: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            type_name: type_name.into(),
            text: text.into(),
            input: input.into(),
        }
    }
}

impl ArgumentError {
    /// Create a missing argument error for the named slot
    pub fn missing(slot: impl Into<String>) -> Self {
        Self::MissingArgument { slot: slot.into() }
    }

    /// Create a too-many-arguments error for the given line
    pub fn too_many(input: impl Into<String>) -> Self {
        Self::TooManyArguments {
            input: input.into(),
        }
    }

    /// Translate a value parse failure for the named slot.
    ///
    /// `ParseError::Missing` becomes a missing argument; everything else is a
    /// malformed value.
    pub fn from_parse(slot: &str, error: ParseError) -> Self {
        match error {
            ParseError::Missing => Self::missing(slot),
            other => Self::MalformedValue(other),
        }
    }
}

impl CommandError {
    /// Create a new command error
    pub fn new(command: impl Into<String>, reason: ArgumentError) -> Self {
        Self {
            command: command.into(),
            reason,
        }
    }
}

impl ArgotError {
    /// Create an unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a duplicate command error
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand { name: name.into() }
    }

    /// Create an invalid command name error
    pub fn invalid_command_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCommandName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
