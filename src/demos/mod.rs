//! Demo routines behind the console commands.

pub mod donut;
pub mod hello;
pub mod trig;

use core::fmt::Write;

/// Zero-argument demo routine; output goes to the console.
pub type DemoFn = fn(&mut dyn Write);

/// Pluggable demo slots.
///
/// A board may repoint these at externally linked routines; the
/// built-ins keep the image self-contained. `hello_cpp` doubles as the
/// availability switch for the `hellocpp` command.
#[derive(Clone, Copy)]
pub struct Demos {
    pub donut: DemoFn,
    pub hello_c: DemoFn,
    pub hello_cpp: Option<DemoFn>,
}

impl Demos {
    /// All slots wired to the built-in routines.
    pub const fn builtin() -> Self {
        Self {
            donut: donut::donut,
            hello_c: hello::hello_c,
            hello_cpp: Some(hello::hello_cpp),
        }
    }
}

impl Default for Demos {
    fn default() -> Self {
        Self::builtin()
    }
}
