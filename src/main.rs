//! Terminal tic-tac-toe.
//!
//! Arrow keys, `wasd` or `hjkl` move, Enter or Space marks a cell, `r`
//! restarts a finished game and `q` quits.

use std::process::ExitCode;
use tictactoe::{Engine, SessionConfig};

fn main() -> ExitCode {
    #[cfg(feature = "debug-log")]
    init_logging();

    match Engine::new(SessionConfig::default()).run_terminal() {
        Ok(reason) => {
            tracing::debug!(?reason, "exit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Send tracing output to a file; the terminal itself is the game display.
#[cfg(feature = "debug-log")]
fn init_logging() {
    let path = std::env::temp_dir().join("tictactoe.log");
    match std::fs::File::create(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        Err(e) => eprintln!("Warning: cannot open {}: {e}", path.display()),
    }
}
