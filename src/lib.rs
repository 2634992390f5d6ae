//! # RustSocDemo
//!
//! Interactive demo shell for a soft-core RISC-V SoC.
//!
//! A single main loop polls the serial console, assembles line-buffered
//! commands, and dispatches them to peripheral demos (LEDs, sound
//! generator, hardware timer, reset, ASCII graphics). Hardware access
//! goes through the capability traits in [`hal`], so everything above
//! the register layer runs and tests on the host as well.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod demos;
pub mod hal;
pub mod logging;

pub use console::{Console, ShellError};
pub use demos::Demos;
pub use hal::Board;
