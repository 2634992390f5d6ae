//! Hardware capabilities.
//!
//! Everything the shell needs from the SoC is expressed as an
//! object-safe trait, collected in [`Board`]. The riscv32 backend in
//! [`litex`] implements them over memory-mapped CSRs; tests implement
//! them over recording mocks. Peripherals a given gateware build can
//! omit (LEDs, sound, timer) are `Option`s, and command availability
//! follows from that at runtime.

use embedded_hal::delay::DelayNs;

use crate::demos::Demos;

#[cfg(target_arch = "riscv32")]
pub mod litex;

#[cfg(not(target_arch = "riscv32"))]
pub mod sim;

/// Non-blocking byte input.
pub trait ByteSource {
    /// Consume one pending byte, `None` when nothing is waiting.
    fn read_byte(&mut self) -> Option<u8>;
}

/// LED output register.
pub trait LedBank {
    /// Drive the LED outputs, one bit per LED.
    fn set(&mut self, bits: u32);
}

/// Programmable sound generator: one tone channel, one noise channel,
/// and a MIDI-note-to-period lookup region.
pub trait SoundGenerator {
    /// Period for a MIDI note, read from the lookup table region.
    fn midi_note_period(&self, note: u8) -> u32;
    /// Tone channel period register.
    fn tone_period(&mut self, period: u32);
    /// Tone channel amplitude register (0 = silent).
    fn tone_amplitude(&mut self, amplitude: u8);
    /// Noise channel period register.
    fn noise_period(&mut self, period: u32);
    /// Noise channel amplitude register (0 = silent).
    fn noise_amplitude(&mut self, amplitude: u8);
}

/// Count-down hardware timer with a latched value register and an
/// event line.
pub trait HwTimer {
    /// Start/stop the countdown.
    fn set_enable(&mut self, enabled: bool);
    /// Enable the timer's event (interrupt) logic.
    fn set_event_enable(&mut self, enabled: bool);
    /// One-shot load value.
    fn set_load(&mut self, value: u32);
    /// Periodic reload value.
    fn set_reload(&mut self, value: u32);
    /// Latch the running counter into the value register.
    fn latch_value(&mut self);
    /// Read the most recently latched counter value.
    fn value(&self) -> u32;
    /// Interrupt line this timer signals on.
    fn irq_line(&self) -> u32;
    /// Frequency the counter decrements at.
    fn clock_hz(&self) -> u32;
}

/// SoC reset control.
pub trait ResetControl {
    /// Assert the reset line. On real hardware this does not return.
    fn assert_reset(&mut self);
}

/// CPU interrupt controller.
pub trait InterruptController {
    /// Route an interrupt line to a handler.
    fn attach(&mut self, line: u32, handler: fn());
    /// Current interrupt enable mask (bit set = line enabled).
    fn mask(&self) -> u32;
    /// Replace the interrupt enable mask.
    fn set_mask(&mut self, mask: u32);
    /// Globally enable interrupt delivery.
    fn enable_interrupts(&mut self);
}

/// Everything a command handler may touch, borrowed for the lifetime
/// of the main loop.
pub struct Board<'a> {
    pub leds: Option<&'a mut dyn LedBank>,
    pub sound: Option<&'a mut dyn SoundGenerator>,
    pub timer: Option<&'a mut dyn HwTimer>,
    pub reset: &'a mut dyn ResetControl,
    pub irq: &'a mut dyn InterruptController,
    pub delay: &'a mut dyn DelayNs,
    pub demos: Demos,
}

/// Acknowledge the demo timer's pending event.
///
/// Free function rather than a `Board` capability: it is called from
/// interrupt context, where no board borrow exists.
#[inline]
pub fn ack_timer_event() {
    #[cfg(target_arch = "riscv32")]
    litex::ack_timer_event();

    #[cfg(not(target_arch = "riscv32"))]
    sim::ack_timer_event();
}

/// Microseconds since boot, for log timestamps.
#[inline]
pub fn timestamp_us() -> i64 {
    #[cfg(target_arch = "riscv32")]
    {
        litex::timestamp_us()
    }

    #[cfg(not(target_arch = "riscv32"))]
    {
        sim::timestamp_us()
    }
}
