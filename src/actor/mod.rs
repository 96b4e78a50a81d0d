//! Actor Model: Message-passing between the game loop and its event sources.
//!
//! - **Input Actor**: Reads raw bytes from standard input, forwards them
//! - **Signal Guard**: Forwards SIGINT/SIGQUIT as interrupts
//! - **Engine**: The game loop; owns the game state and the only writer
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │   frames
//! └──────────────┘                     │    Engine    │ ────────▶ stdout
//! ┌──────────────┐     InputEvent      │  (game loop) │
//! │Signal Thread │ ─────────────────▶  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
#[cfg(unix)]
mod signals;

pub use engine::Engine;
pub use input::InputActor;
pub use messages::{ExitReason, InputEvent, Interrupt};
#[cfg(unix)]
pub use signals::SignalGuard;
