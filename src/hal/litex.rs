//! MMIO backend for the SoC's CSR bus.
//!
//! Register addresses follow the default gateware build (see the
//! generated `csr.csv`); every peripheral is a thin unit struct over
//! volatile accesses. Interrupt delivery uses the CPU's custom
//! mask/pending CSRs with a static per-line handler table.

use core::arch::asm;
use core::cell::UnsafeCell;
use core::fmt::Write;
use core::ptr::{read_volatile, write_volatile};

use crate::config;

use super::{ByteSource, HwTimer, InterruptController, LedBank, ResetControl, SoundGenerator};

/// CSR register map of the default SoC build.
mod csr {
    pub const BASE: usize = 0xf000_0000;

    pub const CTRL_RESET: usize = BASE + 0x0000;

    pub const UART_RXTX: usize = BASE + 0x1000;
    pub const UART_TXFULL: usize = BASE + 0x1004;
    pub const UART_RXEMPTY: usize = BASE + 0x1008;
    pub const UART_EV_PENDING: usize = BASE + 0x1010;
    pub const UART_EV_RX: u32 = 0x2;

    pub const TIMER_LOAD: usize = BASE + 0x2800;
    pub const TIMER_RELOAD: usize = BASE + 0x2804;
    pub const TIMER_EN: usize = BASE + 0x2808;
    pub const TIMER_UPDATE_VALUE: usize = BASE + 0x280c;
    pub const TIMER_VALUE: usize = BASE + 0x2810;
    pub const TIMER_EV_PENDING: usize = BASE + 0x2818;
    pub const TIMER_EV_ENABLE: usize = BASE + 0x281c;
    /// Interrupt line of the demo timer, from the generated map.
    pub const TIMER_IRQ: u32 = 2;

    pub const LEDS_OUT: usize = BASE + 0x3000;

    pub const SOUND_CH1_PERIOD: usize = BASE + 0x3800;
    pub const SOUND_CH1_AMPLITUDE: usize = BASE + 0x3804;
    pub const SOUND_CH4_PERIOD: usize = BASE + 0x3808;
    pub const SOUND_CH4_AMPLITUDE: usize = BASE + 0x380c;
    /// One u32 period per MIDI note number.
    pub const SOUND_MIDI_LOOKUP: usize = BASE + 0x3c00;
}

#[inline]
fn reg_read(addr: usize) -> u32 {
    // SAFETY: addr comes from the csr map above; CSR loads have no
    // side effects beyond the peripheral's documented ones.
    unsafe { read_volatile(addr as *const u32) }
}

#[inline]
fn reg_write(addr: usize, value: u32) {
    // SAFETY: addr comes from the csr map above.
    unsafe { write_volatile(addr as *mut u32, value) }
}

// --- UART ---

/// Serial console over the SoC UART.
pub struct Uart;

impl Uart {
    pub const fn new() -> Self {
        Uart
    }
}

impl ByteSource for Uart {
    fn read_byte(&mut self) -> Option<u8> {
        if reg_read(csr::UART_RXEMPTY) != 0 {
            return None;
        }
        let byte = reg_read(csr::UART_RXTX) as u8;
        reg_write(csr::UART_EV_PENDING, csr::UART_EV_RX);
        Some(byte)
    }
}

impl Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for byte in s.bytes() {
            while reg_read(csr::UART_TXFULL) != 0 {}
            reg_write(csr::UART_RXTX, byte as u32);
        }
        Ok(())
    }
}

// --- LEDs ---

/// LED bank output register.
pub struct Leds;

impl Leds {
    pub const fn new() -> Self {
        Leds
    }
}

impl LedBank for Leds {
    fn set(&mut self, bits: u32) {
        reg_write(csr::LEDS_OUT, bits);
    }
}

// --- Sound generator ---

/// Tone (channel 1) and noise (channel 4) registers plus the MIDI
/// period lookup region.
pub struct Sound;

impl Sound {
    pub const fn new() -> Self {
        Sound
    }
}

impl SoundGenerator for Sound {
    fn midi_note_period(&self, note: u8) -> u32 {
        reg_read(csr::SOUND_MIDI_LOOKUP + (note as usize) * 4)
    }

    fn tone_period(&mut self, period: u32) {
        reg_write(csr::SOUND_CH1_PERIOD, period);
    }

    fn tone_amplitude(&mut self, amplitude: u8) {
        reg_write(csr::SOUND_CH1_AMPLITUDE, amplitude as u32);
    }

    fn noise_period(&mut self, period: u32) {
        reg_write(csr::SOUND_CH4_PERIOD, period);
    }

    fn noise_amplitude(&mut self, amplitude: u8) {
        reg_write(csr::SOUND_CH4_AMPLITUDE, amplitude as u32);
    }
}

// --- Timer ---

/// Count-down timer used by the timer demo.
pub struct Timer;

impl Timer {
    pub const fn new() -> Self {
        Timer
    }
}

impl HwTimer for Timer {
    fn set_enable(&mut self, enabled: bool) {
        reg_write(csr::TIMER_EN, enabled as u32);
    }

    fn set_event_enable(&mut self, enabled: bool) {
        reg_write(csr::TIMER_EV_ENABLE, enabled as u32);
    }

    fn set_load(&mut self, value: u32) {
        reg_write(csr::TIMER_LOAD, value);
    }

    fn set_reload(&mut self, value: u32) {
        reg_write(csr::TIMER_RELOAD, value);
    }

    fn latch_value(&mut self) {
        reg_write(csr::TIMER_UPDATE_VALUE, 1);
    }

    fn value(&self) -> u32 {
        reg_read(csr::TIMER_VALUE)
    }

    fn irq_line(&self) -> u32 {
        csr::TIMER_IRQ
    }

    fn clock_hz(&self) -> u32 {
        config::SYSTEM_CLOCK_HZ
    }
}

/// Acknowledge the demo timer's pending event. Interrupt context.
#[inline]
pub fn ack_timer_event() {
    reg_write(csr::TIMER_EV_PENDING, 1);
}

// --- Reset ---

/// SoC reset register.
pub struct Ctrl;

impl Ctrl {
    pub const fn new() -> Self {
        Ctrl
    }
}

impl ResetControl for Ctrl {
    fn assert_reset(&mut self) {
        reg_write(csr::CTRL_RESET, 1);
    }
}

// --- Interrupt controller ---

const IRQ_LINES: usize = 32;

// Wrapper making the handler table usable from a static.
// SAFETY: written only by attach() on the main path; the interrupt
// dispatcher only reads, and a fn-pointer store is a single word.
#[repr(transparent)]
struct SyncCell<T>(UnsafeCell<T>);
unsafe impl<T> Sync for SyncCell<T> {}

static HANDLERS: SyncCell<[Option<fn()>; IRQ_LINES]> = SyncCell(UnsafeCell::new([None; IRQ_LINES]));

/// CPU interrupt mask/pending live in custom CSRs.
#[inline]
fn irq_mask_read() -> u32 {
    let mask: u32;
    // SAFETY: reading the custom mask CSR has no side effects.
    unsafe { asm!("csrr {0}, 0xbc0", out(reg) mask) };
    mask
}

#[inline]
fn irq_mask_write(mask: u32) {
    // SAFETY: lines without attached handlers stay masked by the
    // callers of this function.
    unsafe { asm!("csrw 0xbc0, {0}", in(reg) mask) };
}

#[inline]
fn irq_pending() -> u32 {
    let pending: u32;
    // SAFETY: reading the pending CSR does not acknowledge anything.
    unsafe { asm!("csrr {0}, 0xfc0", out(reg) pending) };
    pending
}

/// Machine external interrupt entry: fan pending lines out to their
/// attached handlers. Pending bits are acknowledged by the handlers
/// at the peripheral, not here.
#[no_mangle]
#[allow(non_snake_case)]
extern "C" fn MachineExternal() {
    let pending = irq_pending() & irq_mask_read();
    for line in 0..IRQ_LINES {
        if pending & (1 << line) != 0 {
            // SAFETY: reads of single-word fn pointers, see SyncCell.
            if let Some(handler) = unsafe { (*HANDLERS.0.get())[line] } {
                handler();
            }
        }
    }
}

/// The CPU-level interrupt capability.
pub struct Irq;

impl Irq {
    pub const fn new() -> Self {
        Irq
    }
}

impl InterruptController for Irq {
    fn attach(&mut self, line: u32, handler: fn()) {
        if (line as usize) < IRQ_LINES {
            // SAFETY: single writer (main path), single word store.
            unsafe {
                (*HANDLERS.0.get())[line as usize] = Some(handler);
            }
        }
    }

    fn mask(&self) -> u32 {
        irq_mask_read()
    }

    fn set_mask(&mut self, mask: u32) {
        irq_mask_write(mask);
    }

    fn enable_interrupts(&mut self) {
        // SAFETY: handlers are attached before their lines are
        // unmasked, so enabling delivery is sound.
        unsafe {
            riscv::register::mie::set_mext();
            riscv::register::mstatus::set_mie();
        }
    }
}

// --- Delay & timestamps ---

const CYCLES_PER_US: u64 = (config::SYSTEM_CLOCK_HZ / 1_000_000) as u64;

/// Busy-wait delay spinning on the cycle counter.
pub struct CycleDelay;

impl CycleDelay {
    pub const fn new() -> Self {
        CycleDelay
    }
}

impl embedded_hal::delay::DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (ns as u64 * CYCLES_PER_US) / 1_000;
        let start = riscv::register::mcycle::read64();
        while riscv::register::mcycle::read64().wrapping_sub(start) < cycles {
            core::hint::spin_loop();
        }
    }
}

/// Microseconds since boot from the cycle counter.
pub fn timestamp_us() -> i64 {
    (riscv::register::mcycle::read64() / CYCLES_PER_US) as i64
}
