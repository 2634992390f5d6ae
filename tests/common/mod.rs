//! Shared test doubles: recording mocks for every board capability.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rust_soc_demo::demos::Demos;
use rust_soc_demo::hal::{
    Board, ByteSource, HwTimer, InterruptController, LedBank, ResetControl, SoundGenerator,
};

/// One recorded register/delay operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    LedSet(u32),
    TonePeriod(u32),
    ToneAmplitude(u8),
    NoisePeriod(u32),
    NoiseAmplitude(u8),
    TimerEnable(bool),
    TimerEventEnable(bool),
    TimerLoad(u32),
    TimerReload(u32),
    TimerLatch,
    TimerValueRead,
    Reset(u32),
    IrqAttach(u32),
    IrqSetMask(u32),
    DelayMs(u32),
}

/// Operation log shared by all mocks so ordering is observable.
pub type OpLog = Rc<RefCell<Vec<Op>>>;

pub const TEST_CLOCK_HZ: u32 = 48_000_000;
pub const TEST_TIMER_IRQ: u32 = 5;
pub const TEST_TIMER_VALUE: u32 = 1234;

pub struct MockLeds(pub OpLog);

impl LedBank for MockLeds {
    fn set(&mut self, bits: u32) {
        self.0.borrow_mut().push(Op::LedSet(bits));
    }
}

pub struct MockSound(pub OpLog);

impl SoundGenerator for MockSound {
    fn midi_note_period(&self, note: u8) -> u32 {
        // Deterministic fake lookup table
        note as u32 * 1000
    }

    fn tone_period(&mut self, period: u32) {
        self.0.borrow_mut().push(Op::TonePeriod(period));
    }

    fn tone_amplitude(&mut self, amplitude: u8) {
        self.0.borrow_mut().push(Op::ToneAmplitude(amplitude));
    }

    fn noise_period(&mut self, period: u32) {
        self.0.borrow_mut().push(Op::NoisePeriod(period));
    }

    fn noise_amplitude(&mut self, amplitude: u8) {
        self.0.borrow_mut().push(Op::NoiseAmplitude(amplitude));
    }
}

pub struct MockTimer(pub OpLog);

impl HwTimer for MockTimer {
    fn set_enable(&mut self, enabled: bool) {
        self.0.borrow_mut().push(Op::TimerEnable(enabled));
    }

    fn set_event_enable(&mut self, enabled: bool) {
        self.0.borrow_mut().push(Op::TimerEventEnable(enabled));
    }

    fn set_load(&mut self, value: u32) {
        self.0.borrow_mut().push(Op::TimerLoad(value));
    }

    fn set_reload(&mut self, value: u32) {
        self.0.borrow_mut().push(Op::TimerReload(value));
    }

    fn latch_value(&mut self) {
        self.0.borrow_mut().push(Op::TimerLatch);
    }

    fn value(&self) -> u32 {
        self.0.borrow_mut().push(Op::TimerValueRead);
        TEST_TIMER_VALUE
    }

    fn irq_line(&self) -> u32 {
        TEST_TIMER_IRQ
    }

    fn clock_hz(&self) -> u32 {
        TEST_CLOCK_HZ
    }
}

pub struct MockReset(pub OpLog);

impl ResetControl for MockReset {
    fn assert_reset(&mut self) {
        self.0.borrow_mut().push(Op::Reset(1));
    }
}

pub struct MockIrq {
    pub log: OpLog,
    pub mask: u32,
    pub attached: Vec<(u32, fn())>,
    pub interrupts_enabled: bool,
}

impl InterruptController for MockIrq {
    fn attach(&mut self, line: u32, handler: fn()) {
        self.log.borrow_mut().push(Op::IrqAttach(line));
        self.attached.push((line, handler));
    }

    fn mask(&self) -> u32 {
        self.mask
    }

    fn set_mask(&mut self, mask: u32) {
        self.mask = mask;
        self.log.borrow_mut().push(Op::IrqSetMask(mask));
    }

    fn enable_interrupts(&mut self) {
        self.interrupts_enabled = true;
    }
}

pub struct MockDelay(pub OpLog);

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Op::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Op::DelayMs(ms));
    }
}

/// A full set of mocks plus the shared op log.
pub struct Mocks {
    pub leds: MockLeds,
    pub sound: MockSound,
    pub timer: MockTimer,
    pub reset: MockReset,
    pub irq: MockIrq,
    pub delay: MockDelay,
    pub log: OpLog,
}

impl Mocks {
    pub fn new() -> Self {
        let log: OpLog = Rc::new(RefCell::new(Vec::new()));
        Self {
            leds: MockLeds(log.clone()),
            sound: MockSound(log.clone()),
            timer: MockTimer(log.clone()),
            reset: MockReset(log.clone()),
            irq: MockIrq {
                log: log.clone(),
                mask: 0,
                attached: Vec::new(),
                interrupts_enabled: false,
            },
            delay: MockDelay(log.clone()),
            log,
        }
    }

    /// Board with every peripheral present and built-in demos.
    pub fn board(&mut self) -> Board<'_> {
        Board {
            leds: Some(&mut self.leds),
            sound: Some(&mut self.sound),
            timer: Some(&mut self.timer),
            reset: &mut self.reset,
            irq: &mut self.irq,
            delay: &mut self.delay,
            demos: Demos::builtin(),
        }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().clone()
    }

    /// First handler attached to the interrupt controller, if any.
    pub fn attached_handler(&self) -> Option<&(u32, fn())> {
        self.irq.attached.first()
    }
}

/// Console output sink.
pub struct TestOutput(pub String);

impl TestOutput {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn contains(&self, s: &str) -> bool {
        self.0.contains(s)
    }

    pub fn count(&self, s: &str) -> usize {
        self.0.matches(s).count()
    }
}

impl core::fmt::Write for TestOutput {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.push_str(s);
        Ok(())
    }
}

/// The prompt as it appears on the wire.
pub const PROMPT: &str = "\x1b[92;1msoc-demo\x1b[0m> ";

/// Serial port fed from a canned byte script.
pub struct ScriptedPort {
    pub input: VecDeque<u8>,
    pub output: String,
}

impl ScriptedPort {
    pub fn new(script: &str) -> Self {
        Self {
            input: script.bytes().collect(),
            output: String::new(),
        }
    }
}

impl ByteSource for ScriptedPort {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }
}

impl core::fmt::Write for ScriptedPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}
