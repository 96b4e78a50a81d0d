//! Terminal module: Everything that touches the screen.
//!
//! This module contains:
//! - [`OutputBuffer`]: Escape-sequence accumulator flushed in one write
//! - [`Renderer`]: The in-place frame protocol for the board
//! - [`TerminalSession`]: Raw-mode guard with its [`SessionConfig`]

mod output;
mod render;
mod session;

pub use output::{CursorShape, OutputBuffer};
pub use render::{
    cell_column, cell_line, hint_text, status_text, Renderer, FRAME_HEIGHT, RESTART_HINT,
};
pub use session::{SessionConfig, TerminalSession};
