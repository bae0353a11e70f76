//! Chess Console - two players sharing one terminal.
//!
//! Moves are typed as `<from> <to>` (for example `e2 e4`); `quit` ends the
//! session. Logs go to stderr so they never mix with the board.

use chess_console::{stdio_session, ConsoleConfig, Side};
use clap::Parser;
use std::path::PathBuf;

/// Chess Console - two-player chess at the terminal.
#[derive(Parser)]
#[command(name = "chess-console")]
#[command(about = "Two-player chess at the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Starting placement, e.g. "7k/5Q2/8/8/8/8/8/R6K"
    #[arg(long)]
    layout: Option<String>,

    /// Side to move first
    #[arg(long, value_enum)]
    first: Option<Side>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ConsoleConfig::load_from(&args.config)?;
    if let Some(layout) = args.layout {
        config.layout = Some(layout);
    }
    if let Some(first) = args.first {
        config.first = first;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_filter()?)
        .init();

    tracing::info!("Starting chess-console");
    tracing::info!("Config: {:?}", args.config);

    let game = config.new_game()?;
    let resolution = stdio_session(game)
        .show_captures(config.show_captures)
        .run()?;

    tracing::info!("Session finished: {}", resolution);
    Ok(())
}
