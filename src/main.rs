use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Arc, time::Duration};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docqa::{
    api::DocQaClient,
    config::Config,
    controller::Controller,
    handlers::{self, BindingTable, UiEvent},
    model::{PageModel, Region},
    ui, utils,
};

/// Terminal client for a document Q&A service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file (docqa-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Server base URL (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Hide the Zotero panel
    #[arg(long)]
    no_zotero: bool,
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(debug: bool) -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let default_level = if debug { "docqa=debug" } else { "docqa=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    match &config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    if let Some(url) = args.url {
        config.base_url = url;
    }
    if args.no_zotero {
        config.zotero_enabled = false;
    }

    let client = DocQaClient::new(config.base_url.clone(), config.request_timeout())?;
    let base_url = client.base_url().to_string();
    info!(base_url = %base_url, zotero = config.zotero_enabled, "Starting");

    let bindings = BindingTable::page_defaults(config.zotero_enabled);
    let mut controller = Controller::new(Arc::new(client), PageModel::new(config.zotero_enabled));

    // Focus starts inside the drop zone
    bindings.dispatch(&mut controller, Region::DropArea, &UiEvent::DragEnter);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut controller, &bindings, &base_url).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller,
    bindings: &BindingTable,
    base_url: &str,
) -> Result<()> {
    let mut tick: u64 = 0;

    loop {
        terminal.draw(|f| {
            ui::render(f, &controller.page, base_url, tick);
        })?;

        if controller.page.should_quit {
            debug!("Quit requested");
            break;
        }

        // Apply finished requests (non-blocking)
        controller.drain_responses();

        // Short poll keeps the spinner moving while requests are in flight
        let timeout = if controller.page.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            handlers::handle_terminal_event(controller, bindings, event);
        }

        tick = tick.wrapping_add(1);
    }

    Ok(())
}
