//! Handler construction
//!
//! Handlers borrow the [`CliContext`] for the duration of one command.

use super::super::CliContext;

/// A handler built from a borrowed context
pub trait FromContext<'a>: Sized {
    fn from_context(context: &'a CliContext) -> Self;
}

/// Implement [`FromContext`] through the handler's `new(&CliContext)`
macro_rules! context_handler {
    ($handler:ident) => {
        impl<'a> crate::cli::handlers::traits::FromContext<'a> for $handler<'a> {
            fn from_context(context: &'a crate::cli::CliContext) -> Self {
                Self::new(context)
            }
        }
    };
}

pub(crate) use context_handler;

/// Hands out handlers bound to one context
pub struct Handlers<'a> {
    context: &'a CliContext,
}

impl<'a> Handlers<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn get<H: FromContext<'a>>(&self) -> H {
        H::from_context(self.context)
    }
}
