//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.
//!
//! Only relative cursor motion is offered. A frame drawn in the middle of the
//! scrollback has no fixed screen coordinates, so absolute positioning would
//! land in the wrong place.

use std::io::Write;

/// DECSCUSR cursor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// Whatever the user's terminal is configured to show (usually a block).
    #[default]
    UserDefault,
    /// Blinking block.
    BlinkingBlock,
    /// Steady block.
    SteadyBlock,
    /// Blinking underline.
    BlinkingUnderline,
    /// Steady underline.
    SteadyUnderline,
    /// Blinking bar.
    BlinkingBar,
    /// Steady bar.
    SteadyBar,
}

impl CursorShape {
    /// The DECSCUSR parameter for this shape.
    pub const fn param(self) -> u8 {
        match self {
            Self::UserDefault => 0,
            Self::BlinkingBlock => 1,
            Self::SteadyBlock => 2,
            Self::BlinkingUnderline => 3,
            Self::SteadyUnderline => 4,
            Self::BlinkingBar => 5,
            Self::SteadyBar => 6,
        }
    }
}

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a handful of frames.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// End the line and return to column 1.
    ///
    /// Raw mode turns off output newline translation, so the carriage return
    /// is explicit.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Move the cursor up `n` lines, keeping the column.
    #[inline]
    pub fn cursor_up(&mut self, n: u16) {
        if n > 0 {
            self.csi(n, b'A');
        }
    }

    /// Move the cursor down `n` lines, keeping the column.
    #[inline]
    pub fn cursor_down(&mut self, n: u16) {
        if n > 0 {
            self.csi(n, b'B');
        }
    }

    /// Move the cursor right `n` columns.
    #[inline]
    pub fn cursor_forward(&mut self, n: u16) {
        if n > 0 {
            self.csi(n, b'C');
        }
    }

    /// Move the cursor to column 1 of the line `n` lines below.
    ///
    /// Written as `CUD` + `CHA` rather than `CNL`, which not every emulator
    /// understands.
    #[inline]
    pub fn cursor_next_line(&mut self, n: u16) {
        self.cursor_down(n);
        self.cursor_column(1);
    }

    /// Move the cursor to column 1 of the line `n` lines above.
    #[inline]
    pub fn cursor_previous_line(&mut self, n: u16) {
        self.cursor_up(n);
        self.cursor_column(1);
    }

    /// Move the cursor to column `col` (1-indexed) of the current line.
    #[inline]
    pub fn cursor_column(&mut self, col: u16) {
        self.csi(col, b'G');
    }

    /// Erase from the cursor to the end of the line.
    #[inline]
    pub fn erase_line_right(&mut self) {
        self.data.extend_from_slice(b"\x1b[0K");
    }

    /// Erase from the cursor to the end of the screen.
    #[inline]
    pub fn erase_below(&mut self) {
        self.data.extend_from_slice(b"\x1b[0J");
    }

    /// Set the cursor shape.
    #[inline]
    pub fn cursor_shape(&mut self, shape: CursorShape) {
        write!(self.data, "\x1b[{} q", shape.param()).unwrap();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }

    fn csi(&mut self, n: u16, final_byte: u8) {
        // Writing to a Vec cannot fail
        write!(self.data, "\x1b[{n}").unwrap();
        self.data.push(final_byte);
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
