//! Keystroke decoder: raw input bytes to [`Command`]s.
//!
//! Bytes are fed one at a time. An escape byte opens a pending-escape
//! sequence that always consumes exactly two more bytes; only `[A`..`[D`
//! (the arrow keys) mean anything, every other pair decodes to
//! [`Command::Noop`].

use super::Command;

/// Escape byte that introduces arrow-key sequences.
pub const ESC: u8 = 0x1b;

/// Decoder state between bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecoderState {
    /// Waiting for the first byte of a keystroke.
    #[default]
    Ground,
    /// After ESC, waiting for the introducer.
    Escape,
    /// After ESC and one more byte, waiting for the final byte.
    EscapeFinal {
        /// The byte following ESC.
        introducer: u8,
    },
}

/// Incremental keystroke decoder.
///
/// ```
/// use tictactoe::input::{Command, Decoder};
///
/// let mut decoder = Decoder::new();
/// assert_eq!(decoder.decode(b"\x1b[A"), vec![Command::MoveUp]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: DecoderState,
}

impl Decoder {
    /// Create a decoder with no pending escape.
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Ground,
        }
    }

    /// Check if an escape sequence is partially read.
    pub fn is_pending(&self) -> bool {
        self.state != DecoderState::Ground
    }

    /// Feed one byte. Returns a command once a keystroke is complete.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match self.state {
            DecoderState::Ground => {
                if byte == ESC {
                    self.state = DecoderState::Escape;
                    None
                } else {
                    Some(Self::plain(byte))
                }
            }
            DecoderState::Escape => {
                self.state = DecoderState::EscapeFinal { introducer: byte };
                None
            }
            DecoderState::EscapeFinal { introducer } => {
                self.state = DecoderState::Ground;
                Some(Self::escape(introducer, byte))
            }
        }
    }

    /// Feed a slice of bytes and collect every completed command.
    pub fn decode(&mut self, bytes: &[u8]) -> Vec<Command> {
        bytes.iter().filter_map(|&byte| self.feed(byte)).collect()
    }

    /// Map a single-byte keystroke.
    const fn plain(byte: u8) -> Command {
        match byte {
            b'w' | b'k' => Command::MoveUp,
            b's' | b'j' => Command::MoveDown,
            b'a' | b'h' => Command::MoveLeft,
            b'd' | b'l' => Command::MoveRight,
            // Enter arrives as CR once output processing is off
            b'\n' | b'\r' | b' ' => Command::Select,
            b'r' => Command::Restart,
            b'q' => Command::Quit,
            _ => Command::Noop,
        }
    }

    /// Map the two bytes that followed ESC.
    const fn escape(introducer: u8, last: u8) -> Command {
        match (introducer, last) {
            (b'[', b'A') => Command::MoveUp,
            (b'[', b'B') => Command::MoveDown,
            (b'[', b'C') => Command::MoveRight,
            (b'[', b'D') => Command::MoveLeft,
            _ => Command::Noop,
        }
    }
}
