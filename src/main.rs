//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share one keyboard. Cells are picked with `q w e / a s d / z x c`;
//! Ctrl-C quits. The process exits once the game is decided.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_tictactoe::input::KeyboardSource;
use tui_tictactoe::term::TerminalRenderer;
use tui_tictactoe::{GameConfig, GameController};

fn main() -> Result<()> {
    init_tracing();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let mut controller = GameController::from_config(&config, term)?;
    controller.start(&mut KeyboardSource::new())
}

/// Logs go to stderr and are off unless `RUST_LOG` asks for them, so they
/// never draw over the board by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
