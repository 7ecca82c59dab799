//! Typed commands
//!
//! A [`Command`] binds a name and description to an ordinary Rust function
//! and a tuple of [`Arg`] slots whose value types match the function's
//! parameters. Invoking a command parses the slots left to right, checks
//! that no tokens are left over, and only then calls the function.
//!
//! # Example
//!
//! ```rust
//! use argot_core::{Arg, CommandOutput, CommandRegistry};
//!
//! let mut registry = CommandRegistry::new();
//! registry
//!     .register_command(
//!         "greet",
//!         "Greet someone",
//!         |name: String, times: u32| format!("hello {name} x{times}"),
//!         (Arg::<String>::new("name"), Arg::with_default("times", 1u32)),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     registry.run("greet \"big world\"").unwrap(),
//!     CommandOutput::Text("hello big world x1".to_string())
//! );
//! assert!(registry.run("greet a 2 extra").is_err());
//! ```
//!
//! # Line grammar
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `word` | bare token up to whitespace or `]` |
//! | `"a b"` | quoted token, `\"` and `\\` escaped |
//! | `"a""b"` | adjacent quotes concatenate to `ab` |
//! | `x\]` | any escaped character is taken literally |
//! | `[ a b ]` | vector of the element type, nestable |

mod arg;
mod arg_list;
mod command;
mod handler;
pub mod registry;


pub use arg::{Arg, EndOfArguments};
pub use arg_list::ArgList;
pub use command::{Command, CommandBase};
pub use handler::{CommandOutput, Handler, IntoOutput};
pub use registry::CommandRegistry;
