//! Input Actor: Dedicated thread for reading key bytes.
//!
//! Terminal input is read one byte at a time and forwarded unparsed; keystroke
//! decoding happens on the game loop. The only bytes interpreted here are the
//! interrupt and quit control characters, because raw mode stops the terminal
//! from turning them into signals.

use super::messages::{InputEvent, Interrupt};
use crossbeam_channel::Sender;
use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::trace;

/// Ctrl+C.
const ETX: u8 = 0x03;

/// Ctrl+\.
const FS: u8 = 0x1c;

/// Input actor that forwards raw bytes from a reader.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the game loop.
    /// * `reader` - Byte source, normally standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn<R>(sender: Sender<InputEvent>, reader: R) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("tictactoe-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, reader);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to stop after its current read.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    ///
    /// Does not stop the thread. Only returns once the reader reaches end of
    /// input, fails, or the receiver is gone.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main read loop.
    fn run_loop<R: Read>(sender: &Sender<InputEvent>, shutdown: &AtomicBool, mut reader: R) {
        let mut byte = [0u8; 1];
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let event = match reader.read(&mut byte) {
                Ok(0) => InputEvent::EndOfInput,
                Ok(_) => Self::convert_byte(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => InputEvent::Error(e),
            };
            trace!(?event, "input");

            let last = matches!(event, InputEvent::EndOfInput | InputEvent::Error(_));
            if sender.send(event).is_err() || last {
                // Receiver dropped or nothing more to read
                break;
            }
        }
    }

    /// Convert a raw byte to an event.
    fn convert_byte(byte: u8) -> InputEvent {
        match byte {
            ETX => InputEvent::Interrupt(Interrupt::Interrupt),
            FS => InputEvent::Interrupt(Interrupt::Quit),
            _ => InputEvent::Byte(byte),
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        // The thread may be blocked in `read`; it is not joined here and ends
        // with the process.
        self.shutdown();
    }
}
