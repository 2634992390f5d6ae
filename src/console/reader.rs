//! Interactive line reader
//!
//! Consumes one raw byte at a time, applies editing semantics, and
//! yields the finished line on carriage return / newline. The reader
//! does local echo: the transport is assumed to echo nothing.

use core::fmt::Write;

use super::line_buffer::LineBuffer;

/// Byte-at-a-time line editor over a [`LineBuffer`].
pub struct LineReader {
    line: LineBuffer,
}

impl LineReader {
    /// Create a reader with an empty buffer.
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Process a single input byte.
    ///
    /// Returns the completed line on enter, `None` while more input is
    /// needed. Editing bytes never show up in the line:
    /// - delete/backspace erase the last character (no-op when empty)
    /// - bell and NUL are swallowed
    /// - bytes beyond the buffer capacity are dropped silently
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<&str> {
        match byte {
            // Backspace / delete
            0x7F | 0x08 => {
                if self.line.backspace() {
                    // Echo: backspace, space, backspace
                    let _ = out.write_str("\x08 \x08");
                }
                None
            }

            // Bell; NUL is dropped so a submitted line is never
            // interior-terminated.
            0x07 | 0x00 => None,

            // Enter
            b'\r' | b'\n' => {
                let _ = out.write_str("\n");
                Some(self.line.submit())
            }

            _ => {
                if self.line.push(byte) {
                    let _ = out.write_char(byte as char);
                }
                None
            }
        }
    }

    /// Current (unsubmitted) buffer content.
    pub fn pending(&self) -> &str {
        self.line.as_str()
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
