//! SoC and demo configuration constants.
//!
//! Values mirror the generated configuration of the default gateware;
//! adjust `SYSTEM_CLOCK_HZ` when retargeting a different build.

/// System clock frequency of the default SoC build.
pub const SYSTEM_CLOCK_HZ: u32 = 50_000_000;

/// Tick rate the timer demo programs into the hardware timer.
pub const TIMER_TICK_HZ: u32 = 10;

/// Number of counter samples the timer demo prints.
pub const TIMER_SAMPLES: usize = 40;

/// Busy-wait between two timer samples, in milliseconds.
pub const TIMER_SAMPLE_DELAY_MS: u32 = 100;
