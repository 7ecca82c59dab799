//! Ordered argument lists
//!
//! A command's slots are a tuple of [`Arg`]s. The tuple's value types form
//! the parameter list the handler must accept, so a handler with the wrong
//! arity or types is rejected when the command is constructed.

use crate::error::ArgumentError;
use crate::value::{Cursor, Value};

use super::arg::Arg;

/// A fixed, ordered list of argument slots
pub trait ArgList {
    /// Tuple of parsed values, in declaration order
    type Values;

    /// Number of declared slots
    const COUNT: usize;

    /// Bind every slot left to right, stopping at the first failure
    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Values, ArgumentError>;

    /// Concatenated usage fragments of every slot
    fn info(&self) -> String;
}

impl ArgList for () {
    type Values = ();

    const COUNT: usize = 0;

    fn parse(&self, _cursor: &mut Cursor<'_>) -> Result<Self::Values, ArgumentError> {
        Ok(())
    }

    fn info(&self) -> String {
        String::new()
    }
}

macro_rules! impl_arg_list {
    ($count:expr; $($ty:ident $idx:tt),+) => {
        impl<$($ty: Value + Clone),+> ArgList for ($(Arg<$ty>,)+) {
            type Values = ($($ty,)+);

            const COUNT: usize = $count;

            fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Values, ArgumentError> {
                // Tuple fields evaluate left to right, and `?` stops at the first error.
                Ok(($(self.$idx.parse(cursor)?,)+))
            }

            fn info(&self) -> String {
                let mut info = String::new();
                $(info.push_str(&self.$idx.info());)+
                info
            }
        }
    };
}

impl_arg_list!(1; A 0);
impl_arg_list!(2; A 0, B 1);
impl_arg_list!(3; A 0, B 1, C 2);
impl_arg_list!(4; A 0, B 1, C 2, D 3);
impl_arg_list!(5; A 0, B 1, C 2, D 3, E 4);
impl_arg_list!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_arg_list!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_arg_list!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
