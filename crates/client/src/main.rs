//! Demo host for the itemhud decision engine.
//!
//! Runs a scripted player inventory at 20 ticks per second, feeds it to a
//! handful of HUD widgets, and renders what each widget decided in a small
//! terminal UI. Logs go to a file so the TUI stays clean; point `RUST_LOG`
//! at `debug` to watch visibility transitions.
mod app;
mod presentation;
mod sim;

use anyhow::Result;
use app::App;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    tracing::info!("starting itemhud demo");

    let app = App::new()?;
    let mut terminal = presentation::terminal::init()?;
    let _guard = presentation::terminal::TerminalGuard;

    let result = presentation::event_loop::run(app, &mut terminal).await;

    presentation::terminal::restore()?;
    result
}

/// Setup file logging; the alternate screen owns stdout and stderr.
fn setup_logging() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "itemhud.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the non-blocking writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("log file: {}/itemhud.log", log_dir.display());

    Ok(())
}

fn log_directory() -> std::path::PathBuf {
    if let Some(cache) = std::env::var_os("XDG_CACHE_HOME") {
        return std::path::PathBuf::from(cache).join("itemhud").join("logs");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return std::path::PathBuf::from(home)
            .join(".cache")
            .join("itemhud")
            .join("logs");
    }
    std::env::temp_dir().join("itemhud").join("logs")
}
