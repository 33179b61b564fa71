//! Command-line interface for the `counter` binary.
//!
//! # Examples
//!
//! ```bash
//! # Render the initial view as HTML
//! counter render
//!
//! # Render a preset state
//! counter render --counter 7
//! counter render --error
//!
//! # Replay clicks and print the display after each one
//! counter play "++-"
//!
//! # Show the effective configuration
//! counter --config widget.toml config
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Counter widget - render and drive the counter from the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "counter",
    author,
    version,
    about = "Render and drive the counter widget from the command line"
)]
pub struct Cli {
    /// Path to a widget config file (.toml or .json)
    #[arg(long, short = 'c', global = true, env = "COUNTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the rendered widget as HTML
    Render(RenderArgs),

    /// Replay a sequence of button clicks
    Play(PlayArgs),

    /// Print the effective configuration as JSON
    Config,
}

/// Arguments for the render subcommand.
///
/// Passing either flag replaces the configured initial state; the configured
/// labels are kept.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Counter value to render (replaces the configured state, defaults to 0)
    #[arg(long)]
    pub counter: Option<u64>,

    /// Render with the error message showing; the counter is 0 in this state
    #[arg(long)]
    pub error: bool,
}

/// Arguments for the play subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Clicks to replay: `+`/`i` increment, `-`/`d` decrement.
    /// Whitespace and commas are ignored.
    #[arg(allow_hyphen_values = true)]
    pub actions: String,

    /// Print the final view as HTML instead of each display line
    #[arg(long)]
    pub html: bool,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Log filter directive for the `-v` count, if any was given.
    #[must_use]
    pub const fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_defaults() {
        let cli = Cli::try_parse_from(["counter", "render"]).unwrap();
        assert_eq!(cli.verbosity_filter(), None);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.counter, None);
                assert!(!args.error);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_play_with_leading_hyphen() {
        let cli = Cli::try_parse_from(["counter", "play", "--html", "-+-"]).unwrap();
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.actions, "-+-");
                assert!(args.html);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbosity_levels() {
        let cli = Cli::try_parse_from(["counter", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbosity_filter(), Some("debug"));
        let cli = Cli::try_parse_from(["counter", "config", "-vvvv"]).unwrap();
        assert_eq!(cli.verbosity_filter(), Some("trace"));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["counter"]).is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["counter", "render", "--config", "w.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("w.toml")));
    }
}
