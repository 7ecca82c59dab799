//! Core error types for Argot

use thiserror::Error;

/// Result type alias for Argot operations
pub type ArgotResult<T> = Result<T, ArgotError>;

/// Failure while decoding a single value from an input line.
///
/// Every structural variant carries the full, unmodified input line so the
/// diagnostic shows where the offending text came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No token was available where a value was required
    #[error("no value was given")]
    Missing,

    /// A quoted segment was still open at end of input
    #[error("unterminated quoted string in \"{input}\"")]
    UnterminatedQuote { input: String },

    /// A vector literal was still open at end of input
    #[error("unterminated vector in \"{input}\"")]
    UnterminatedVector { input: String },

    /// A backslash was the final character of the input
    #[error("dangling escape character at end of \"{input}\"")]
    DanglingEscape { input: String },

    /// A vector type was requested but the token does not start with `[`
    #[error("expected '[' to start a {type_name} in \"{input}\"")]
    ExpectedVector { type_name: String, input: String },

    /// An unescaped `]` appeared where a scalar was expected
    #[error("unexpected ']' where a {type_name} was expected in \"{input}\"")]
    UnexpectedCloseBracket { type_name: String, input: String },

    /// The decoded text could not be converted to the requested type
    #[error("'{text}' is not a valid {type_name} in \"{input}\"")]
    InvalidValue {
        type_name: String,
        text: String,
        input: String,
    },
}

/// Failure while binding a command's argument slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Fewer tokens than declared slots and the slot has no default
    #[error("not enough arguments were given, missing '{slot}'")]
    MissingArgument { slot: String },

    /// Tokens were left over after the last declared slot
    #[error("too many arguments were given in \"{input}\"")]
    TooManyArguments { input: String },

    /// A token could not be decoded as the slot's type
    #[error("{0}")]
    MalformedValue(#[source] ParseError),

    /// The handler ran and reported a failure of its own
    #[error("{0}")]
    Handler(String),
}

/// An argument failure attributed to the command that rejected it.
///
/// Renders as `"<command>: <reason>"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{command}: {reason}")]
pub struct CommandError {
    /// Name of the command that was invoked
    pub command: String,
    /// Why the invocation was rejected
    #[source]
    pub reason: ArgumentError,
}

/// Main error type for Argot
#[derive(Error, Debug, Clone)]
pub enum ArgotError {
    /// No command is registered under the given name
    #[error("Command not found: {name}")]
    UnknownCommand { name: String },

    /// A command with the same name is already registered
    #[error("Command already registered: {name}")]
    DuplicateCommand { name: String },

    /// The name cannot be looked up from an input line
    #[error("Invalid command name '{name}': {reason}")]
    InvalidCommandName { name: String, reason: String },

    /// The command rejected the line or its handler failed
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl ArgotError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            Self::DuplicateCommand { .. } => "DUPLICATE_COMMAND",
            Self::InvalidCommandName { .. } => "INVALID_COMMAND_NAME",
            Self::Command(err) => match err.reason {
                ArgumentError::MissingArgument { .. } => "MISSING_ARGUMENT",
                ArgumentError::TooManyArguments { .. } => "TOO_MANY_ARGUMENTS",
                ArgumentError::MalformedValue(_) => "MALFORMED_VALUE",
                ArgumentError::Handler(_) => "HANDLER_FAILED",
            },
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// Whether the error was caused by what the user typed rather than by
    /// the program or its environment
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. } | Self::Command(_))
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArgotError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
        }
    }
}
