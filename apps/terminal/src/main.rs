//! shogun: learn Japanese vocabulary in the terminal.

mod config;
mod loader;
mod logging;
mod terminal;
mod ui;

use anyhow::Context;
use clap::Parser;
use config::{Cli, Config};
use drill_core::SessionSummary;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use terminal::TerminalGuard;
use ui::App;

fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init_tracing(config.log_file.as_deref())?;
    tracing::info!(?config, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let pending = loader::spawn(runtime.handle(), config.vocabulary.clone());
    let mut app = App::new(pending, config.settings);

    terminal::install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to initialize terminal")
        .and_then(|mut terminal| ui::run(&mut terminal, &mut app));
    drop(guard);
    res?;

    if let Some(summary) = app.summary() {
        tracing::info!(
            answered = summary.answered,
            correct = summary.correct,
            "session finished"
        );
        if summary.answered > 0 {
            println!("{}", format_summary(&summary));
        }
    }

    Ok(())
}

fn format_summary(summary: &SessionSummary) -> String {
    let seconds = summary.elapsed.num_seconds().max(0);
    format!(
        "{}/{} correct in {}m {:02}s (started {} UTC)",
        summary.correct,
        summary.answered,
        seconds / 60,
        seconds % 60,
        summary.started_at.format("%H:%M"),
    )
}
