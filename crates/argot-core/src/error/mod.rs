//! Error types for Argot
//!
//! Errors are layered the same way parsing is:
//! - [`ParseError`]: a single value could not be decoded from the line
//! - [`ArgumentError`]: a slot or the arity check rejected the line
//! - [`CommandError`]: an [`ArgumentError`] tagged with the command name
//! - [`ArgotError`]: registry, configuration and I/O failures

mod constructors;
mod types;

#[cfg(test)]
mod tests;

pub use types::{ArgotError, ArgotResult, ArgumentError, CommandError, ParseError};
