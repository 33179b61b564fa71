//! Widget state and its two-phase state machine.
//!
//! ```text
//!            decrement (counter == 0)
//!   Normal ───────────────────────────▶ Error
//!     ▲ │                                │ │
//!     │ │ increment / decrement (> 0)    │ │ decrement: no-op
//!     │ └──────┘                         │ └──────┘
//!     └──────────────────────────────────┘
//!            increment (clears error)
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Logical phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// The display shows the counter value.
    #[default]
    Normal,
    /// The display shows the error message; the counter is pinned at zero.
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// The counter and its error flag.
///
/// Both fields are private so the invariant `error_flag => counter == 0`
/// holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidgetState {
    counter: u64,
    error_flag: bool,
}

impl WidgetState {
    /// The mount state: counter 0, no error.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            counter: 0,
            error_flag: false,
        }
    }

    /// Build a preset state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when `error_flag` is set and `counter`
    /// is not zero.
    pub fn new(counter: u64, error_flag: bool) -> Result<Self> {
        if error_flag && counter != 0 {
            return Err(Error::InvalidState { counter });
        }
        Ok(Self {
            counter,
            error_flag,
        })
    }

    /// A state at `counter` with no error.
    #[must_use]
    pub const fn with_counter(counter: u64) -> Self {
        Self {
            counter,
            error_flag: false,
        }
    }

    /// The state entered by decrementing at zero.
    #[must_use]
    pub const fn errored() -> Self {
        Self {
            counter: 0,
            error_flag: true,
        }
    }

    /// Current counter value.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Whether the error message is showing.
    #[must_use]
    pub const fn error_flag(&self) -> bool {
        self.error_flag
    }

    /// Current logical phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.error_flag {
            Phase::Error
        } else {
            Phase::Normal
        }
    }

    /// Clear the error if set, otherwise add one.
    ///
    /// Returns `false` only when the counter is already at `u64::MAX` and the
    /// increment was absorbed.
    pub(crate) const fn increment(&mut self) -> bool {
        if self.error_flag {
            self.error_flag = false;
            return true;
        }
        match self.counter.checked_add(1) {
            Some(next) => {
                self.counter = next;
                true
            }
            None => false,
        }
    }

    /// Subtract one, or raise the error flag at zero.
    pub(crate) const fn decrement(&mut self) {
        if self.counter == 0 {
            self.error_flag = true;
        } else {
            self.counter -= 1;
        }
    }
}
