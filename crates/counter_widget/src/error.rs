//! Error types for the counter widget.
//!
//! The decrement-below-zero condition is *not* an error in this sense: it is
//! ordinary widget state and shows up in the rendered display. The variants
//! here cover integration mistakes made by hosts and harnesses.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hook::{ParseHookError, TestHook};

/// Errors returned by widget construction, configuration and the simulator.
#[derive(Error, Debug)]
pub enum Error {
    /// A preset state had the error flag set with a non-zero counter.
    #[error("invalid widget state: error flag set with counter {counter}")]
    InvalidState {
        /// The counter value that was supplied with the error flag.
        counter: u64,
    },

    /// A hook name did not match any known element.
    #[error(transparent)]
    UnknownHook(#[from] ParseHookError),

    /// The rendered view contains no element with the hook.
    #[error("no element with data-test=\"{hook}\" in the rendered view")]
    HookNotFound {
        /// The hook that was searched for.
        hook: TestHook,
    },

    /// A click was dispatched to an element that does not handle clicks.
    #[error("element data-test=\"{hook}\" is not clickable")]
    NotClickable {
        /// The hook that was clicked.
        hook: TestHook,
    },

    /// A configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config {}: {message}", path.display())]
    ConfigParse {
        /// Path of the configuration file (or `<inline>`).
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The configuration file extension is neither `.toml` nor `.json`.
    #[error("unsupported config format: {} (expected .toml or .json)", path.display())]
    UnsupportedConfigFormat {
        /// Path of the configuration file.
        path: PathBuf,
    },
}

/// A specialized [`Result`] type for counter widget operations.
pub type Result<T> = std::result::Result<T, Error>;
