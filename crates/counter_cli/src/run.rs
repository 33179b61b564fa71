//! Subcommand implementations.
//!
//! Each command writes to the supplied writer so tests can capture output
//! without spawning the binary.

use std::io::Write;

use anyhow::{Context, Result};
use counter_widget::{
    CounterMsg, CounterWidget, Model, WidgetConfig, WidgetSimulator, WidgetState,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::{Command, PlayArgs, RenderArgs};

/// A playback string contained a character that is not a click.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid action {ch:?} at position {position} (expected '+', '-', 'i' or 'd')")]
pub struct ActionParseError {
    /// The rejected character.
    pub ch: char,
    /// Zero-based character index in the input.
    pub position: usize,
}

/// Parse a playback string into messages.
///
/// # Errors
///
/// Returns [`ActionParseError`] for the first character that is neither a
/// click, whitespace nor a comma.
pub fn parse_actions(input: &str) -> Result<Vec<CounterMsg>, ActionParseError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace() && *ch != ',')
        .map(|(position, ch)| CounterMsg::from_action(ch).ok_or(ActionParseError { ch, position }))
        .collect()
}

/// Execute `command` against `config`, writing results to `out`.
///
/// # Errors
///
/// Fails on invalid preset states, invalid playback strings and write errors.
pub fn execute(command: &Command, config: &WidgetConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Render(args) => render(args, config, out),
        Command::Play(args) => play(args, config, out),
        Command::Config => {
            let json = config.to_json_pretty()?;
            writeln!(out, "{json}")?;
            Ok(())
        }
    }
}

fn render(args: &RenderArgs, config: &WidgetConfig, out: &mut impl Write) -> Result<()> {
    // Either flag replaces the configured state entirely; labels still apply.
    let widget = if args.counter.is_some() || args.error {
        let counter = args.counter.unwrap_or(0);
        let state = WidgetState::new(counter, args.error).context("invalid --counter/--error")?;
        CounterWidget::with_state(state).with_labels(config.labels())
    } else {
        CounterWidget::from_config(config).context("invalid configured state")?
    };
    info!(counter = widget.counter(), error = widget.error_flag(), "mounted widget");
    writeln!(out, "{}", widget.view())?;
    Ok(())
}

fn play(args: &PlayArgs, config: &WidgetConfig, out: &mut impl Write) -> Result<()> {
    let msgs = parse_actions(&args.actions)?;
    let widget = CounterWidget::from_config(config).context("invalid configured state")?;
    info!(
        counter = widget.counter(),
        error = widget.error_flag(),
        clicks = msgs.len(),
        "mounted widget"
    );

    let mut sim = WidgetSimulator::new(widget);
    sim.init();
    for msg in msgs {
        sim.click(msg.hook())?;
        debug!(%msg, display = %sim.model().display_text(), "replayed click");
        if !args.html {
            writeln!(out, "{}", sim.model().display_text())?;
        }
    }

    if args.html {
        writeln!(out, "{}", sim.model().view())?;
    }
    Ok(())
}
