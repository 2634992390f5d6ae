//! Serial console: line editing and command dispatch
//!
//! Polled from the main loop - no dedicated task.
//! Zero heap allocation - all static buffers.

pub mod commands;
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod parser;
pub mod reader;

pub use commands::{execute, print_help, CommandDescriptor, COMMANDS};
pub use console::{Console, VERSION};
pub use error::ShellError;
pub use line_buffer::LineBuffer;
pub use parser::{split_command, ParsedCommand};
pub use reader::LineReader;
