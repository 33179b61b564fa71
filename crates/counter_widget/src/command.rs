//! Commands for follow-up work.
//!
//! A command is a deferred computation that may produce one more message for
//! the model. The counter itself never needs one (both of its operations are
//! synchronous), but hosts driving any [`Model`](crate::Model) execute the
//! commands returned from `init` and `update` and feed the results back.

use std::fmt;

/// A command that may produce a message when executed.
///
/// Commands are lazy: nothing runs until the host calls [`Cmd::execute`].
///
/// # Example
///
/// ```rust
/// use counter_widget::{Cmd, CounterMsg};
///
/// let cmd = Cmd::new(|| CounterMsg::Increment);
/// assert_eq!(cmd.execute(), Some(CounterMsg::Increment));
/// ```
pub struct Cmd<M>(Box<dyn FnOnce() -> Option<M> + 'static>);

impl<M: 'static> Cmd<M> {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> M + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<M> + 'static,
    {
        Self(Box::new(f))
    }

    /// Create a command that immediately yields `msg`.
    pub fn message(msg: M) -> Self {
        Self(Box::new(move || Some(msg)))
    }

    /// Create an empty command that does nothing.
    #[must_use]
    pub const fn none() -> Option<Self> {
        None
    }
}

impl<M> Cmd<M> {
    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<M> {
        (self.0)()
    }
}

impl<M> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}
