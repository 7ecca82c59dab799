//! Handlers and their output

use std::fmt::Display;

/// What a successful invocation produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandOutput {
    /// The handler returned nothing to show
    #[default]
    None,
    /// Text for the front end to display
    Text(String),
}

impl CommandOutput {
    /// Text output, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Whether there is nothing to display
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Conversion from a handler's return value.
///
/// `Err` carries the message reported as the command's failure reason.
pub trait IntoOutput {
    fn into_output(self) -> Result<CommandOutput, String>;
}

impl IntoOutput for () {
    fn into_output(self) -> Result<CommandOutput, String> {
        Ok(CommandOutput::None)
    }
}

impl IntoOutput for String {
    fn into_output(self) -> Result<CommandOutput, String> {
        Ok(CommandOutput::Text(self))
    }
}

impl IntoOutput for &'static str {
    fn into_output(self) -> Result<CommandOutput, String> {
        Ok(CommandOutput::Text(self.to_string()))
    }
}

impl IntoOutput for CommandOutput {
    fn into_output(self) -> Result<CommandOutput, String> {
        Ok(self)
    }
}

impl<T: IntoOutput, E: Display> IntoOutput for Result<T, E> {
    fn into_output(self) -> Result<CommandOutput, String> {
        match self {
            Ok(value) => value.into_output(),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// A callable accepting the parsed values of an argument list.
///
/// Implemented for every `FnMut` whose parameters match `Args` exactly.
pub trait Handler<Args, Out> {
    fn call(&mut self, args: Args) -> Out;
}

macro_rules! impl_handler {
    ($($ty:ident $var:ident),*) => {
        impl<Func, Out, $($ty),*> Handler<($($ty,)*), Out> for Func
        where
            Func: FnMut($($ty),*) -> Out,
        {
            #[allow(clippy::unused_unit)]
            fn call(&mut self, ($($var,)*): ($($ty,)*)) -> Out {
                (self)($($var),*)
            }
        }
    };
}

impl_handler!();
impl_handler!(A a);
impl_handler!(A a, B b);
impl_handler!(A a, B b, C c);
impl_handler!(A a, B b, C c, D d);
impl_handler!(A a, B b, C c, D d, E e);
impl_handler!(A a, B b, C c, D d, E e, F f);
impl_handler!(A a, B b, C c, D d, E e, F f, G g);
impl_handler!(A a, B b, C c, D d, E e, F f, G g, H h);
