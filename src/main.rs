use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tdisco::api::client::DiscoveryClient;
use tdisco::app::{App, ServicesFetched};
use tdisco::config::Config;
use tdisco::event::{self, Outcome};
use tdisco::ui::{
    self,
    splash::{render as render_splash, SplashState, Step},
};
use tokio::sync::mpsc;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Terminal UI for cloud service discovery
#[derive(Parser, Debug)]
#[command(name = "tdisco", version, about, long_about = None)]
struct Args {
    /// Discovery API base URL (default: config file, then http://localhost:5000/api)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {:?}: {}", log_path, e))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("tdisco started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("tdisco").join("tdisco.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".tdisco").join("tdisco.log");
    }
    PathBuf::from("tdisco.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    // Resolve and validate the backend before taking over the terminal
    let config = Config::load();
    let api_url = config.effective_api_url(args.api_url.as_deref());
    tracing::info!("Using discovery API: {}", api_url);
    let client = DiscoveryClient::new(&api_url)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    let result = match initialize_with_splash(&mut terminal, &mut app).await {
        Ok(true) => run_app(&mut terminal, &mut app).await,
        Ok(false) => Ok(()),
        Err(err) => Err(err),
    };

    cleanup_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the startup sequence behind the splash screen.
/// Returns Ok(false) when the user aborted with Ctrl+C.
async fn initialize_with_splash<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<bool>
where
    B::Error: Send + Sync + 'static,
{
    let mut splash = SplashState::new(app.client.base_url());

    // Health gates the other two steps
    splash.begin(Step::Health);
    terminal.draw(|f| render_splash(f, &splash))?;
    let healthy = app.check_health().await;
    splash.finish(Step::Health, healthy);
    terminal.draw(|f| render_splash(f, &splash))?;

    if !healthy {
        tracing::warn!("Backend unhealthy, skipping regions and services");
        tokio::time::sleep(Duration::from_millis(300)).await;
        return Ok(true);
    }
    if check_abort()? {
        return Ok(false);
    }

    // Region failures are swallowed by the app
    splash.begin(Step::Regions);
    terminal.draw(|f| render_splash(f, &splash))?;
    app.fetch_regions().await;
    splash.finish(Step::Regions, true);

    if check_abort()? {
        return Ok(false);
    }

    splash.begin(Step::Services);
    terminal.draw(|f| render_splash(f, &splash))?;
    app.fetch_services().await;
    splash.finish(Step::Services, app.status.error.is_none());
    terminal.draw(|f| render_splash(f, &splash))?;

    tokio::time::sleep(Duration::from_millis(200)).await;

    Ok(true)
}

fn check_abort() -> Result<bool> {
    if poll(Duration::from_millis(50))? {
        if let Event::Key(key) = read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<ServicesFetched>();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match event::handle_events(app)? {
            Outcome::Quit => return Ok(()),
            Outcome::Refresh => {
                app.spawn_refresh(tx.clone());
            },
            Outcome::Continue => {},
        }

        // Apply any finished background fetches
        while let Ok(fetched) = rx.try_recv() {
            app.apply_services(fetched);
        }
    }
}
