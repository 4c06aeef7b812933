//! Rewindable tic-tac-toe terminal client.

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::{Position, Timeline};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { log_file } => run_tui(&log_file),
        Command::Replay { moves } => run_replay(&moves),
    }
}

/// Runs the interactive TUI.
fn run_tui(log_file: &std::path::Path) -> Result<()> {
    // Log to a file so tracing output never tears the alternate screen.
    let log = std::fs::File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!("Starting rewindable tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Synchronous event loop: draw, block on the next key, repeat.
///
/// Every game operation completes before the next event is read, so the
/// timeline is only ever touched by one action at a time.
fn run_game<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let mut app = app::App::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == app::Action::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

/// Replays a recorded move sequence and prints the final position.
fn run_replay(moves: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let positions = parse_moves(moves)?;
    let timeline = Timeline::replay(&positions).context("move sequence is not playable")?;

    println!("{}", timeline.current().display());
    println!();
    println!("{}", timeline.status());

    Ok(())
}

/// Parses a digit string of cell numbers 1-9 into board positions.
fn parse_moves(moves: &str) -> Result<Vec<Position>> {
    moves
        .trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .filter(|digit| (1..=9).contains(digit))
                .and_then(|digit| Position::from_index(digit as usize - 1))
                .with_context(|| format!("invalid cell number {c:?} (expected 1-9)"))
        })
        .collect()
}
