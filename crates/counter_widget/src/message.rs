//! Message types for the counter widget.
//!
//! Messages are the only way to update the widget. Each button activation in
//! the host is translated into exactly one [`CounterMsg`].

use std::fmt;

use crate::hook::TestHook;

/// Messages understood by [`CounterWidget`](crate::CounterWidget).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterMsg {
    /// The increment button was activated.
    Increment,
    /// The decrement button was activated.
    Decrement,
}

impl CounterMsg {
    /// Returns the message a click on `hook` produces, if the hook is a button.
    #[must_use]
    pub const fn from_hook(hook: TestHook) -> Option<Self> {
        match hook {
            TestHook::IncrementButton => Some(Self::Increment),
            TestHook::DecrementButton => Some(Self::Decrement),
            TestHook::ComponentApp | TestHook::CounterDisplay => None,
        }
    }

    /// Returns the button hook that produces this message.
    #[must_use]
    pub const fn hook(self) -> TestHook {
        match self {
            Self::Increment => TestHook::IncrementButton,
            Self::Decrement => TestHook::DecrementButton,
        }
    }

    /// Parses a single playback action character.
    ///
    /// `+` / `i` increment, `-` / `d` decrement (case-insensitive).
    #[must_use]
    pub const fn from_action(ch: char) -> Option<Self> {
        match ch {
            '+' | 'i' | 'I' => Some(Self::Increment),
            '-' | 'd' | 'D' => Some(Self::Decrement),
            _ => None,
        }
    }
}

impl fmt::Display for CounterMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => f.write_str("increment"),
            Self::Decrement => f.write_str("decrement"),
        }
    }
}
