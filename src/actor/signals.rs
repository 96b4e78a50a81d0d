//! Signal Guard: Turns SIGINT/SIGQUIT into channel events.
//!
//! A dedicated thread waits on the signals and forwards them to the game loop,
//! which stops and lets the terminal session restore the terminal on its way
//! out. SIGTSTP is caught and dropped: suspending would leave the terminal in
//! raw mode behind the shell.

use super::messages::{InputEvent, Interrupt};
use crossbeam_channel::Sender;
use signal_hook::consts::signal::{SIGINT, SIGQUIT, SIGTSTP};
use signal_hook::iterator::{Handle, Signals};
use std::io;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Keeps the signal handlers installed for its lifetime.
#[derive(Debug)]
pub struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    /// Install the handlers and spawn the forwarding thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the handlers cannot be registered or the thread
    /// cannot be spawned.
    pub fn spawn(sender: Sender<InputEvent>) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGQUIT, SIGTSTP])?;
        let handle = signals.handle();

        let thread = thread::Builder::new()
            .name("tictactoe-signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    let interrupt = match signal {
                        SIGINT => Interrupt::Interrupt,
                        SIGQUIT => Interrupt::Quit,
                        _ => {
                            debug!(signal, "signal ignored");
                            continue;
                        }
                    };
                    warn!(?interrupt, "termination signal received");
                    if sender.send(InputEvent::Interrupt(interrupt)).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(5);

    // Signals are process-wide, so every raise happens in this one test while
    // the guard is installed.
    #[test]
    fn test_signals_are_forwarded_or_swallowed() {
        let (tx, rx) = unbounded();
        let guard = SignalGuard::spawn(tx).unwrap();

        signal_hook::low_level::raise(SIGTSTP).unwrap();
        signal_hook::low_level::raise(SIGINT).unwrap();
        let event = rx.recv_timeout(TIMEOUT).unwrap();
        assert!(matches!(event, InputEvent::Interrupt(Interrupt::Interrupt)));

        signal_hook::low_level::raise(SIGQUIT).unwrap();
        let event = rx.recv_timeout(TIMEOUT).unwrap();
        assert!(matches!(event, InputEvent::Interrupt(Interrupt::Quit)));

        // SIGTSTP neither stopped the process nor produced an event.
        signal_hook::low_level::raise(SIGTSTP).unwrap();
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

        drop(guard);
        assert!(rx.recv_timeout(TIMEOUT).is_err());
    }
}
