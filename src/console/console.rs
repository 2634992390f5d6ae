//! Main console struct tying reader and dispatcher together

use core::fmt::Write;

use crate::hal::{Board, ByteSource};

use super::commands::{execute, print_help};
use super::error::ShellError;
use super::parser::split_command;
use super::reader::LineReader;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Prompt tag, rendered bright green like the rest of the family.
const PROMPT: &str = "soc-demo";

/// Console state: a line reader feeding the command dispatcher.
pub struct Console {
    reader: LineReader,
}

impl Console {
    /// Create new console
    pub const fn new() -> Self {
        Self {
            reader: LineReader::new(),
        }
    }

    /// Service the console once: consume at most one pending byte.
    ///
    /// Returns `None` when no byte was available or the line is still
    /// being edited, `Some(result)` once a line was submitted and
    /// dispatched.
    pub fn poll<S>(&mut self, port: &mut S, board: &mut Board<'_>) -> Option<Result<(), ShellError>>
    where
        S: ByteSource + Write,
    {
        let byte = port.read_byte()?;
        self.process_byte(byte, board, port)
    }

    /// Process a single input byte.
    ///
    /// On a completed line: tokenize, dispatch, and reprint the prompt
    /// whether or not anything matched. Dispatch failures are returned
    /// but never printed.
    pub fn process_byte(
        &mut self,
        byte: u8,
        board: &mut Board<'_>,
        out: &mut dyn Write,
    ) -> Option<Result<(), ShellError>> {
        let line = self.reader.process_byte(byte, out)?;
        let cmd = split_command(line);
        let result = execute(&cmd, board, out);
        self.print_prompt(out);
        Some(result)
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = write!(out, "\x1b[92;1m{}\x1b[0m> ", PROMPT);
    }

    /// Print welcome banner: help listing plus the first prompt.
    pub fn print_banner(&self, board: &Board<'_>, out: &mut dyn Write) {
        print_help(board, out);
        self.print_prompt(out);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
