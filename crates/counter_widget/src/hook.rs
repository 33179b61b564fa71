//! Test hooks: the stable `data-test` identifiers of the rendered widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the attribute that carries a [`TestHook`] in rendered markup.
pub const TEST_ATTR: &str = "data-test";

/// An addressable element of the counter widget.
///
/// The string form of each hook is written into the `data-test` attribute of
/// the matching element and must stay stable across implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestHook {
    /// Root container (`div`).
    ComponentApp,
    /// Text label showing the counter or the error message (`h1`).
    CounterDisplay,
    /// Button that increments the counter or clears the error.
    IncrementButton,
    /// Button that decrements the counter.
    DecrementButton,
}

impl TestHook {
    /// Every hook, in document order.
    pub const ALL: [Self; 4] = [
        Self::ComponentApp,
        Self::CounterDisplay,
        Self::IncrementButton,
        Self::DecrementButton,
    ];

    /// Returns the attribute value for this hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComponentApp => "component-app",
            Self::CounterDisplay => "counter-display",
            Self::IncrementButton => "increment-button",
            Self::DecrementButton => "decrement-button",
        }
    }

    /// Returns true for hooks that accept clicks.
    #[must_use]
    pub const fn is_button(self) -> bool {
        matches!(self, Self::IncrementButton | Self::DecrementButton)
    }

    /// Returns a CSS attribute selector for this hook, e.g.
    /// `[data-test="counter-display"]`.
    #[must_use]
    pub fn selector(self) -> String {
        format!(r#"[{TEST_ATTR}="{}"]"#, self.as_str())
    }
}

impl fmt::Display for TestHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestHook {
    type Err = ParseHookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| ParseHookError(s.to_string()))
    }
}

/// Error returned when parsing an unknown test hook name.
///
/// Hook names are matched exactly; `"Counter-Display"` is rejected.
///
/// # Example
///
/// ```rust
/// use counter_widget::TestHook;
///
/// assert!("counter-display".parse::<TestHook>().is_ok());
/// assert!("counter".parse::<TestHook>().is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown test hook: {0:?}")]
pub struct ParseHookError(String);

impl ParseHookError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}
