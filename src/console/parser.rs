//! Command line parser
//!
//! Splits a submitted line at the first space into the command verb
//! and the raw remainder. No handler consumes the remainder today; it
//! is kept so argument-taking commands can be added without touching
//! the dispatch path.

/// Parsed command: verb plus untouched remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The command name (everything before the first space)
    pub command: &'a str,
    /// Everything after the first space, `""` when there is none
    pub rest: &'a str,
}

/// Split a line into command and remainder at the first space.
///
/// The split is positional, not whitespace-aware: leading spaces make
/// the verb empty, exactly like the line discipline this replaces.
pub fn split_command(line: &str) -> ParsedCommand<'_> {
    match line.split_once(' ') {
        Some((command, rest)) => ParsedCommand { command, rest },
        None => ParsedCommand {
            command: line,
            rest: "",
        },
    }
}
