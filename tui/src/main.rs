//! Clockgrid Entry Point
//!
//! Launches the terminal UI for the clock grid puzzle.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults
//! clockgrid
//!
//! # Start the flexer at 8 columns, sampling the clock every 250 ms
//! clockgrid --cols 8 --tick-ms 250
//!
//! # Print the tokenized clue as JSON and exit
//! clockgrid --dump clue
//!
//! # Verbose logging (stderr)
//! RUST_LOG=clockgrid_core=debug clockgrid 2> clockgrid.log
//! ```

use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clockgrid_core::{
    load_config_from_path, ClockReading, ClockgridConfig, ConfigOverrides, PuzzleSession,
    SessionEvent,
};
use clockgrid_tui::{render_dump, App, DumpView};

/// Clockgrid - clock grid puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "clockgrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial column count for the grid flexer
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Initial row count for the grid flexer
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Clock sampling interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Clue text file, replacing the built-in clue
    #[arg(long, value_name = "FILE")]
    clue: Option<PathBuf>,

    /// Print a view as JSON and exit
    #[arg(long, value_enum, value_name = "VIEW")]
    dump: Option<DumpView>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(rows) = self.rows {
            overrides = overrides.with_rows(rows);
        }
        if let Some(cols) = self.cols {
            overrides = overrides.with_cols(cols);
        }
        if let Some(ms) = self.tick_ms {
            overrides = overrides.with_tick_ms(ms);
        }
        if let Some(ref path) = self.clue {
            overrides = overrides.with_clue_path(path.clone());
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the UI or a dump
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = load(&args)?;
    tracing::info!(source = %config.source(), "Configuration loaded");

    if let Some(view) = args.dump {
        let mut session = PuzzleSession::from_config(&config)?;
        session.apply(SessionEvent::ClockTick(ClockReading::now()));
        println!("{}", render_dump(&session, view)?);
        return Ok(());
    }

    // Check if we have a TTY before attempting initialization
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: clockgrid requires a terminal (TTY)");
        eprintln!();
        eprintln!("Use --dump <clock|grid|answers|clue> for non-interactive output.");
        std::process::exit(1);
    }

    let mut app = App::from_config(&config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

/// Load config from the chosen file (or the default path), then apply CLI flags
fn load(args: &Args) -> anyhow::Result<ClockgridConfig> {
    let path = args
        .config
        .clone()
        .or_else(clockgrid_core::default_config_path);
    let mut config = load_config_from_path(path.clone()).with_context(|| {
        format!(
            "Failed to load configuration{}",
            path.map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        )
    })?;
    args.overrides()
        .apply(&mut config)
        .context("Invalid command-line option")?;
    Ok(config)
}
