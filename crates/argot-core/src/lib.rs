//! Argot Core Library
//!
//! This crate provides the engine behind the Argot console: a typed value
//! grammar with a recursive-descent parser, argument slots bound to Rust
//! types, and commands that dispatch a raw text line to an ordinary Rust
//! function once every argument has been parsed.
//!
//! ```rust
//! use argot_core::{Arg, CommandOutput, CommandRegistry};
//!
//! let mut registry = CommandRegistry::new();
//! registry
//!     .register_command(
//!         "add",
//!         "Add two integers",
//!         |a: i32, b: i32| format!("{}", a + b),
//!         (Arg::<i32>::new("a"), Arg::<i32>::new("b")),
//!     )
//!     .unwrap();
//!
//! let output = registry.run("add 2 40").unwrap();
//! assert_eq!(output, CommandOutput::Text("42".to_string()));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use commands::{
    Arg, ArgList, Command, CommandBase, CommandOutput, CommandRegistry, EndOfArguments, Handler,
    IntoOutput,
};
pub use config::{
    ConsoleConfig, LoggingConfig, load_config, load_config_from_env, load_config_from_file,
    load_config_with_overrides,
};
pub use error::{ArgotError, ArgotResult, ArgumentError, CommandError, ParseError};
pub use value::{Cursor, PointOfInterest, RegisteredType, Value, registered_type};
