//! Built-in hello routines.
//!
//! Stand-ins for the foreign-language hello objects a board may link
//! into the [`Demos`](super::Demos) slots instead.

use core::fmt::Write;

pub fn hello_c(out: &mut dyn Write) {
    let _ = writeln!(out, "C: Hello, world!");
}

pub fn hello_cpp(out: &mut dyn Write) {
    let _ = writeln!(out, "C++: Hello, world!");
}
