// timesouk - terminal client for a time-based service-exchange marketplace
//
// Architecture:
// - Router: page navigation state (active page, one-slot history, selection)
// - Catalog: in-memory mock data the listing pages browse
// - Query engine: the filter/search/sort pipeline shared by every listing
// - TUI (ratatui): renders the resolved page and drives all transitions
// - Logging: tracing events captured to an in-memory buffer for display

mod catalog;
mod cli;
mod config;
mod locale;
mod logging;
mod router;
mod session;
mod tui;

use anyhow::Result;
use catalog::Catalog;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path).
    // If a command was handled, exit early.
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure a config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs go to an in-memory buffer the TUI renders; writing to stdout
    // would garble the alternate screen.
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("timesouk={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's lifetime so file logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let appender =
                        tracing_appender::rolling::daily(&config.logging.file_dir, "timesouk.log");
                    let (writer, guard) = tracing_appender::non_blocking(appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    let catalog = Catalog::seeded();
    tracing::info!(
        services = catalog.services.len(),
        projects = catalog.projects.len(),
        freelancers = catalog.freelancers.len(),
        posts = catalog.posts.len(),
        "catalog seeded"
    );
    tracing::info!(landing = config.landing.as_str(), "starting timesouk");

    tui::run_tui(config, catalog, log_buffer).await
}
