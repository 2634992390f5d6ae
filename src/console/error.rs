//! Console error types

/// Outcome of a dispatch that did not run a handler.
///
/// The shell surfaces neither case to the user: unknown and
/// unavailable commands are dropped without diagnostic. The variants
/// exist so callers (and tests) can observe what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    /// No command table entry with that name
    UnknownCommand,
    /// Entry exists, but the board lacks the peripheral behind it
    Unavailable,
}

impl ShellError {
    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown command",
            Self::Unavailable => "command not available on this board",
        }
    }
}

impl core::fmt::Display for ShellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
