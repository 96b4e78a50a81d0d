//! Input module: Keystroke decoding.
//!
//! This module contains:
//! - [`Command`]: The discrete actions the game understands
//! - [`Decoder`]: Byte-at-a-time decoder with a pending-escape state

mod command;
mod decoder;

pub use command::Command;
pub use decoder::{Decoder, ESC};
