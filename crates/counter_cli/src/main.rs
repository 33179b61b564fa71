#![forbid(unsafe_code)]

use std::io;

use anyhow::Context;
use counter_cli::cli::Cli;
use counter_cli::{logging, run};
use counter_widget::WidgetConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WidgetConfig::default(),
    };

    let env_filter = std::env::var("RUST_LOG").ok();
    logging::init(&logging::resolve_filter(
        env_filter.as_deref(),
        cli.verbosity_filter(),
        &config.log_level,
    ));
    // The subscriber is installed only once the config is known, so the load
    // event is reported here.
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "loaded widget config");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::execute(&cli.command, &config, &mut out)
}
