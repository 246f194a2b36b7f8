//! EduFlow - terminal dashboards for a mocked education platform.
//!
//! Students, teachers and admins each get their own dashboard. Everything
//! runs offline against a local key-value store.

mod app;
mod ui;
mod utils;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eduflow_core::{store, Config, FileStore, KvStore, MemoryStore};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file prefix inside the data directory
const LOG_FILE_PREFIX: &str = "eduflow.log";

const USAGE: &str = "\
Usage: eduflow [OPTIONS]

Options:
  --reset       Delete all locally stored data and exit
  --ephemeral   Keep data and config in memory only (logs go to the temp dir)
  -h, --help    Print this help

Environment:
  EDUFLOW_DATA_DIR   Override the data directory
  RUST_LOG           Log filter (default: warn)";

/// Command line mode
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Run { ephemeral: bool },
    Reset,
    Help,
}

fn parse_args(args: &[String]) -> Result<Mode> {
    let mut ephemeral = false;
    for arg in args {
        match arg.as_str() {
            "--reset" => return Ok(Mode::Reset),
            "--ephemeral" => ephemeral = true,
            "-h" | "--help" => return Ok(Mode::Help),
            other => anyhow::bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }
    Ok(Mode::Run { ephemeral })
}

/// Initialize the tracing subscriber for logging.
///
/// The terminal belongs to the UI, so logs go to a daily file in the data
/// directory. Use RUST_LOG to control the level (e.g., RUST_LOG=debug).
fn init_tracing(log_dir: &Path) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    guard
}

fn open_file_store(data_dir: &Path) -> Result<FileStore> {
    FileStore::new(data_dir.to_path_buf())
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))
}

/// Ephemeral runs never touch the data directory, so their logs go to the
/// system temp directory instead.
fn log_dir(ephemeral: bool, data_dir: &Path) -> PathBuf {
    if ephemeral {
        std::env::temp_dir()
    } else {
        data_dir.to_path_buf()
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args)?;

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load config ({}), using defaults", e);
        Config::default()
    });
    let data_dir = config.data_dir();

    let ephemeral = match mode {
        Mode::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Mode::Reset => {
            let file_store = open_file_store(&data_dir)?;
            let removed = store::clear(&file_store).context("Failed to clear local data")?;
            println!("Removed {} stored keys from {}", removed, data_dir.display());
            return Ok(());
        }
        Mode::Run { ephemeral } => ephemeral,
    };

    let local_store: Box<dyn KvStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(open_file_store(&data_dir)?)
    };

    let _log_guard = init_tracing(&log_dir(ephemeral, &data_dir));
    info!(data_dir = %data_dir.display(), ephemeral, "EduFlow starting");

    let mut app = App::new(config, local_store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if !ephemeral {
        if let Err(e) = app.config.save() {
            warn!(error = %e, "Failed to save config");
        }
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("EduFlow shutting down");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&[]).unwrap(), Mode::Run { ephemeral: false });
        assert_eq!(
            parse_args(&args(&["--ephemeral"])).unwrap(),
            Mode::Run { ephemeral: true }
        );
        assert_eq!(parse_args(&args(&["--reset"])).unwrap(), Mode::Reset);
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Mode::Help);
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_ephemeral_logs_outside_data_dir() {
        let data_dir = PathBuf::from("/srv/eduflow-data");
        assert_eq!(log_dir(false, &data_dir), data_dir);
        assert_eq!(log_dir(true, &data_dir), std::env::temp_dir());
    }
}
