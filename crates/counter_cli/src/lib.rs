#![forbid(unsafe_code)]

//! # Counter CLI
//!
//! Command-line front end for [`counter_widget`]: render the widget as HTML,
//! replay button clicks and inspect configuration.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p counter_cli -- play "++-"
//! ```

pub mod cli;
pub mod logging;
pub mod run;
