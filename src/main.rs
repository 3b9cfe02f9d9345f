//! Ratdock - Main entry point.
//!
//! A terminal dock with hover magnification.
//!
//! Usage: ratdock [OPTIONS]
//!
//! Options:
//!   --version, -v      Show version
//!   --config PATH      Load settings from PATH instead of ~/.ratdock/dock.toml
//!   --help, -h         Show usage

use std::env;
use std::io;
use std::panic;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use ratdock::app::App;
use ratdock::config::DockSettings;
use ratdock::logging;

/// Crate version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum iterations for main loop (safety bound).
const MAX_MAIN_ITERATIONS: usize = 10_000_000;

const USAGE: &str = "Usage: ratdock [--config PATH] [--version]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("ratdock v{}", VERSION);
        return Ok(());
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_path = match args.iter().position(|a| a == "--config") {
        Some(pos) => match args.get(pos + 1) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                eprintln!("--config requires a path\n{}", USAGE);
                std::process::exit(2);
            }
        },
        None => None,
    };

    let settings = match &config_path {
        Some(path) => DockSettings::load_from(path)?,
        None => DockSettings::load()?,
    };

    if let Err(e) = logging::init(&settings.log) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    info!("ratdock v{} starting", VERSION);

    // Restore the terminal before the default hook prints
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new(&settings)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut iterations = 0;
    while app.is_running() && iterations < MAX_MAIN_ITERATIONS {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if let Err(e) = app.update() {
            warn!("Event loop error: {}", e);
            break;
        }

        iterations += 1;
    }

    restore_terminal()?;
    info!("ratdock exiting");
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
