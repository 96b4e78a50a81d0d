//! Engine: The game loop that ties input, game state and rendering together.
//!
//! The Engine is the entry point for the binary. It owns the terminal session,
//! spawns the input and signal actors, and runs one decode/apply/render step
//! per key until the game asks to exit.

use super::messages::{ExitReason, InputEvent};
use super::InputActor;
use crate::error::Result;
use crate::game::Game;
use crate::input::Decoder;
use crate::terminal::{OutputBuffer, Renderer, SessionConfig, TerminalSession};
use crossbeam_channel::{bounded, Receiver};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// The tic-tac-toe engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// Configuration.
    config: SessionConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub const fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Play on the controlling terminal until quit, end of input or interrupt.
    ///
    /// The terminal is restored on every return path, errors included.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::NotATerminal`] if standard input is not a
    /// TTY, or an I/O error from the terminal.
    pub fn run_terminal(&self) -> Result<ExitReason> {
        let session = TerminalSession::new()?;

        let (tx, rx) = bounded::<InputEvent>(64);
        #[cfg(unix)]
        let _signals = if self.config.handle_signals {
            Some(super::SignalGuard::spawn(tx.clone())?)
        } else {
            None
        };
        let _input = InputActor::spawn(tx, io::stdin())?;

        let result = self.run(&rx, &mut io::stdout());
        drop(session);
        result
    }

    /// Run the game loop over an event stream, writing frames to `writer`.
    ///
    /// Draws the opening frame, then redraws once per decoded command. On the
    /// way out the terminal cursor is parked below the frame and the exit
    /// cursor shape is set.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails or the input actor
    /// reports a read error.
    pub fn run<W: Write>(
        &self,
        events: &Receiver<InputEvent>,
        writer: &mut W,
    ) -> Result<ExitReason> {
        let mut game = Game::new();
        let mut renderer = Renderer::new();
        let mut decoder = Decoder::new();
        let mut out = OutputBuffer::new();

        out.cursor_shape(self.config.play_cursor);
        renderer.render(&game, &mut out);
        out.flush_to(writer)?;
        game.mark_drawn();
        info!("game started");

        let outcome: Result<ExitReason> = loop {
            let Ok(event) = events.recv() else {
                break Ok(ExitReason::EndOfInput);
            };

            let byte = match event {
                InputEvent::Byte(byte) => byte,
                InputEvent::Interrupt(interrupt) => {
                    break Ok(ExitReason::Interrupted(interrupt));
                }
                InputEvent::EndOfInput => break Ok(ExitReason::EndOfInput),
                InputEvent::Error(e) => {
                    warn!(error = %e, "input failed");
                    break Err(e.into());
                }
            };

            let Some(command) = decoder.feed(byte) else {
                continue;
            };
            let status = game.apply(command);
            debug!(?command, ?status, "step");

            out.clear();
            renderer.render(&game, &mut out);
            out.flush_to(writer)?;
            game.mark_drawn();
            game.settle();

            if status.is_exit() {
                break Ok(ExitReason::Quit);
            }
        };

        out.clear();
        renderer.finish(game.cursor(), self.config.exit_cursor, &mut out);
        out.flush_to(writer)?;
        info!(?outcome, "game ended");

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Interrupt;
    use crate::terminal::CursorShape;
    use crossbeam_channel::unbounded;

    struct Run {
        reason: ExitReason,
        screen: vt100::Parser,
        bytes: Vec<u8>,
    }

    fn play(events: Vec<InputEvent>) -> Run {
        let (tx, rx) = unbounded();
        for event in events {
            tx.send(event).unwrap();
        }
        drop(tx);

        let mut bytes = Vec::new();
        let reason = Engine::default().run(&rx, &mut bytes).unwrap();
        let mut screen = vt100::Parser::new(24, 80, 0);
        screen.process(&bytes);
        Run {
            reason,
            screen,
            bytes,
        }
    }

    fn keys(input: &[u8]) -> Vec<InputEvent> {
        input.iter().copied().map(InputEvent::Byte).collect()
    }

    fn rows(run: &Run) -> Vec<String> {
        run.screen.screen().rows(0, 80).collect()
    }

    #[test]
    fn test_quit_parks_cursor_below_frame() {
        let run = play(keys(b"q"));
        assert_eq!(run.reason, ExitReason::Quit);
        assert_eq!(rows(&run)[1], "│   │   │   │ Player 1");
        assert_eq!(run.screen.screen().cursor_position(), (7, 0));
    }

    #[test]
    fn test_keys_after_quit_are_not_applied() {
        let run = play(keys(b" q lj "));
        assert_eq!(run.reason, ExitReason::Quit);
        assert_eq!(rows(&run)[3], "│   │ X │   │");
        assert_eq!(rows(&run)[5], "│   │   │   │");
    }

    #[test]
    fn test_row_win_then_restart() {
        // X (0,0), O (1,1), X (0,1), O (2,2), X (0,2) using arrows and letters
        let script = b"\x1b[A\x1b[D \x1b[B\x1b[C k \x1b[Al j ";
        let run = play(keys(script));
        assert_eq!(run.reason, ExitReason::EndOfInput);

        let rows = rows(&run);
        assert_eq!(rows[1], "│ X │ X │ X │ Player 1 Wins");
        assert_eq!(rows[2], "├───┼───┼───┤ Press `r` to restart");
        assert_eq!(rows[3], "│   │ O │   │");
        assert_eq!(rows[5], "│   │   │ O │");

        let mut restarted = script.to_vec();
        restarted.extend_from_slice(b"wr");
        let run = play(keys(&restarted));
        let rows = self::rows(&run);
        assert_eq!(rows[1], "│   │   │   │ Player 1");
        assert_eq!(rows[2], "├───┼───┼───┤");
        assert!(rows[7..].iter().all(String::is_empty));
    }

    #[test]
    fn test_interrupt_stops_the_loop() {
        let mut events = keys(b" ");
        events.push(InputEvent::Interrupt(Interrupt::Interrupt));
        events.extend(keys(b"l "));

        let run = play(events);
        assert_eq!(run.reason, ExitReason::Interrupted(Interrupt::Interrupt));
        assert_eq!(rows(&run)[3], "│   │ X │   │");
        assert_eq!(run.screen.screen().cursor_position(), (7, 0));
    }

    #[test]
    fn test_read_error_is_reported() {
        let (tx, rx) = unbounded();
        tx.send(InputEvent::Error(io::Error::other("gone"))).unwrap();
        let mut bytes = Vec::new();

        let result = Engine::default().run(&rx, &mut bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_cursor_shapes() {
        let run = play(keys(b"q"));
        let text = String::from_utf8(run.bytes).unwrap();
        assert!(text.starts_with("\x1b[4 q"));
        assert!(text.ends_with("\x1b[0 q"));

        let engine = Engine::new(SessionConfig {
            play_cursor: CursorShape::SteadyBar,
            ..SessionConfig::default()
        });
        let (tx, rx) = unbounded();
        tx.send(InputEvent::Byte(b'q')).unwrap();
        let mut bytes = Vec::new();
        engine.run(&rx, &mut bytes).unwrap();
        assert!(bytes.starts_with(b"\x1b[6 q"));
    }

    #[test]
    fn test_pending_escape_is_not_a_redraw() {
        // A lone ESC followed by end of input decodes nothing: one frame only.
        let run = play(keys(b"\x1b["));
        let text = String::from_utf8(run.bytes).unwrap();
        assert_eq!(text.matches('┌').count(), 1);
    }
}
