use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use termfolio::{
    app::App, boot, events::EventsService, loader, render::Pages, session::Session, Config,
};

/// Send logs to `path`, since stdout belongs to the interface
///
/// `RUST_LOG` overrides the default level unless `--debug` is given.
fn init_tracing(path: &Path, debug: bool) -> Result<WorkerGuard> {
    let filter = if debug {
        EnvFilter::new("termfolio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("termfolio=info"))
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    let _guard = init_tracing(&config.log_file(), config.debug)?;
    tracing::debug!(?config, "termfolio starting");

    let source = config.data_source();
    let portfolio = loader::load_portfolio(&*source).await;
    let session = Session::new(config.prompt.clone(), Pages::build(&portfolio));

    let events = EventsService::new(boot::spawn(config.boot_pace));
    App::new(session)
        .run_fullscreen(events)
        .await
        .context("terminal interface failed")?;

    Ok(())
}
