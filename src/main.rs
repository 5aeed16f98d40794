//! quadro - a terminal Kanban client for a service-order task board.
//!
//! This is the main binary that launches the TUI application.

use quadro_api::ApiClient;
use quadro_config::Config;
use quadro_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to a file when requested; stderr would corrupt the alternate screen
    init_logging()?;

    // Load configuration (files, then the QUADRO_SERVER override)
    let config = Config::load()?;
    tracing::info!(server = %config.server.base_url, "starting quadro");

    let api = ApiClient::new(config.server.base_url.clone());

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the main loop; the app fires the initial board load itself
    let mut app = App::new(api, config.refresh.interval());
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Initializes file-based logging when `QUADRO_LOG` names a log file.
///
/// Without the variable, logging stays disabled: the TUI owns the
/// terminal and has nowhere sensible to print.
fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("QUADRO_LOG") else {
        return Ok(());
    };
    if path.trim().is_empty() {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
