//! Commands: a name, a description, a handler and its argument slots

use std::marker::PhantomData;

use tracing::trace;

use crate::error::{ArgumentError, CommandError};
use crate::value::Cursor;

use super::arg::EndOfArguments;
use super::arg_list::ArgList;
use super::handler::{CommandOutput, Handler, IntoOutput};

/// Operations shared by every command, whatever its argument list.
///
/// An invocation takes `&mut self`, so one command runs at most one
/// invocation at a time; the registry serializes access per command.
pub trait CommandBase: Send {
    /// Command name
    fn name(&self) -> &str;

    /// Command description
    fn description(&self) -> &str;

    /// Parse `input` against the argument slots and call the handler
    fn invoke(&mut self, input: &str) -> Result<CommandOutput, CommandError>;

    /// Help text listing the command's usage
    fn help(&self) -> String;

    /// Number of declared argument slots
    fn argument_count(&self) -> usize;
}

/// A handler bound to a typed argument list.
///
/// The handler's parameters must equal the slot value types in order:
///
/// ```compile_fail
/// use argot_core::{Arg, Command};
///
/// // Two slots, one parameter: does not type-check.
/// let command = Command::new(
///     "bad",
///     "",
///     |a: i32| println!("{a}"),
///     (Arg::<i32>::new("a"), Arg::<i32>::new("b")),
/// );
/// ```
pub struct Command<F, S, Out> {
    name: String,
    description: String,
    handler: F,
    args: S,
    end: EndOfArguments,
    _output: PhantomData<fn() -> Out>,
}

impl<F, S, Out> Command<F, S, Out>
where
    S: ArgList,
    F: Handler<S::Values, Out>,
    Out: IntoOutput,
{
    /// Create a new command
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
        args: S,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
            args,
            end: EndOfArguments,
            _output: PhantomData,
        }
    }

    /// Bind every slot, then require that nothing is left over
    fn bind(&self, input: &str) -> Result<S::Values, ArgumentError> {
        let mut cursor = Cursor::new(input);
        let values = self.args.parse(&mut cursor)?;
        self.end.parse(&cursor)?;
        trace!(command = %self.name, consumed = cursor.offset(), "arguments bound");
        Ok(values)
    }
}

impl<F, S, Out> CommandBase for Command<F, S, Out>
where
    S: ArgList + Send,
    F: Handler<S::Values, Out> + Send,
    Out: IntoOutput,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn invoke(&mut self, input: &str) -> Result<CommandOutput, CommandError> {
        let values = self
            .bind(input)
            .map_err(|reason| CommandError::new(&self.name, reason))?;

        self.handler
            .call(values)
            .into_output()
            .map_err(|message| CommandError::new(&self.name, ArgumentError::Handler(message)))
    }

    fn help(&self) -> String {
        format!(
            "COMMAND: {name}\n  Description - {description}\n\n  Usage - {name}{usage}\n\n",
            name = self.name,
            description = self.description,
            usage = self.args.info(),
        )
    }

    fn argument_count(&self) -> usize {
        S::COUNT
    }
}

impl<F, S, Out> std::fmt::Debug for Command<F, S, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
