//! Host stand-ins for the free-function hardware hooks.
//!
//! The capability traits are mocked per test; these two functions have
//! no object to hang off, so the host build counts and zeroes instead
//! of touching registers.

use core::sync::atomic::{AtomicU32, Ordering};

static ACKED_TIMER_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Count an acknowledge instead of writing the event-pending register.
pub fn ack_timer_event() {
    ACKED_TIMER_EVENTS.fetch_add(1, Ordering::Relaxed);
}

/// Number of timer-event acknowledgements so far.
pub fn acked_timer_events() -> u32 {
    ACKED_TIMER_EVENTS.load(Ordering::Relaxed)
}

/// No clock on the host; log timestamps read as zero.
pub fn timestamp_us() -> i64 {
    0
}
