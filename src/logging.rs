//! Interrupt-safe logging.
//!
//! Interrupt handlers must never touch the (blocking) UART transmit
//! path, so anything they want to say goes through a fixed-size
//! lock-free ring instead:
//!
//! ```text
//! IRQ handler             IRQ_LOG              main loop
//! ───────────             ───────             ─────────
//! isr_info!() ──────────▶ [E0][E1][E2] ─────▶ console TX
//! non-blocking            lock-free ring      blocking ok
//! ```
//!
//! Messages are dropped (and counted) when the ring is full; the drain
//! side reports the dropped total once it catches up.

use core::cell::UnsafeCell;
use core::fmt::Write;
use core::sync::atomic::{AtomicU32, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 80;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 64;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
pub struct LogEntry {
    /// Timestamp in microseconds.
    pub timestamp_us: i64,
    /// Log level.
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl Default for LogEntry {
    fn default() -> Self {
        Self {
            timestamp_us: 0,
            level: LogLevel::Info,
            len: 0,
            msg: [0; MAX_MSG_LEN],
        }
    }
}

/// Lock-free log ring: producers push from interrupt or thread context,
/// a single consumer drains.
///
/// Slot reservation uses a compare-exchange loop, so a push against a
/// full ring is rejected without consuming capacity. On a single hart a
/// preempting push runs to completion before the drain resumes, which
/// keeps entry payloads consistent without a per-slot commit flag.
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    entries: UnsafeCell<[LogEntry; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: writers reserve unique slots through the CAS on `write_idx`;
// the single consumer only reads slots below `write_idx`.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            entries: UnsafeCell::new(
                [LogEntry {
                    timestamp_us: 0,
                    level: LogLevel::Info,
                    len: 0,
                    msg: [0; MAX_MSG_LEN],
                }; N],
            ),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push a log entry. Never blocks.
    ///
    /// Returns `true` if the message was queued, `false` if it was
    /// dropped because the ring is full.
    #[inline]
    pub fn push(&self, timestamp_us: i64, level: LogLevel, msg: &[u8]) -> bool {
        let idx = loop {
            let write = self.write_idx.load(Ordering::Acquire);
            let read = self.read_idx.load(Ordering::Acquire);

            if write.wrapping_sub(read) >= N as u32 {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                return false;
            }

            if self
                .write_idx
                .compare_exchange_weak(
                    write,
                    write.wrapping_add(1),
                    Ordering::AcqRel,
                    Ordering::Relaxed,
                )
                .is_ok()
            {
                break (write as usize) & Self::MASK;
            }
        };

        // SAFETY: the CAS handed this producer a slot nobody else holds.
        unsafe {
            let entry = &mut (*self.entries.get())[idx];
            entry.timestamp_us = timestamp_us;
            entry.level = level;
            entry.len = msg.len().min(MAX_MSG_LEN) as u8;
            entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);
        }

        true
    }

    /// Drain the next log entry, if any.
    #[inline]
    pub fn drain(&self) -> Option<LogEntry> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let idx = (read as usize) & Self::MASK;

        // SAFETY: single consumer, slot below write_idx.
        let entry = unsafe { (*self.entries.get())[idx] };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Count of dropped messages since the last reset.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset the dropped counter after reporting it.
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Check if there are entries to drain.
    #[inline]
    pub fn has_entries(&self) -> bool {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        read != write
    }

    /// Number of entries waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages produced in interrupt context, drained by the main loop.
pub static IRQ_LOG: LogStream = LogStream::new();

/// Format a message into a buffer.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Write one formatted entry: `[timestamp] LEVEL: message`.
pub fn write_entry(out: &mut dyn Write, entry: &LogEntry) {
    let _ = writeln!(
        out,
        "[{:10}] {}: {}",
        entry.timestamp_us,
        entry.level.as_str(),
        core::str::from_utf8(&entry.msg[..entry.len as usize]).unwrap_or("<invalid utf8>")
    );
}

/// Drain `IRQ_LOG` to the console and report dropped messages.
pub fn drain(out: &mut dyn Write) {
    while let Some(entry) = IRQ_LOG.drain() {
        write_entry(out, &entry);
    }

    let dropped = IRQ_LOG.dropped();
    if dropped > 0 {
        let _ = writeln!(out, "[WARN] {} log messages dropped", dropped);
        IRQ_LOG.reset_dropped();
    }
}

/// Interrupt-safe log macro.
///
/// Formats into a stack buffer and pushes onto the given stream; use
/// this instead of writing to the console from interrupt context.
#[macro_export]
macro_rules! isr_log {
    ($level:expr, $stream:expr, $timestamp:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($timestamp, $level, &buf[..len]);
    }};
}

/// Interrupt-safe info log.
#[macro_export]
macro_rules! isr_info {
    ($stream:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::isr_log!($crate::logging::LogLevel::Info, $stream, $timestamp, $($arg)*)
    };
}
