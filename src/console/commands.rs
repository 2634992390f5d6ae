//! Command handlers

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config;
use crate::hal::{self, Board};
use crate::logging;

use super::console::VERSION;
use super::error::ShellError;
use super::parser::ParsedCommand;

/// Command handler signature.
///
/// Handlers receive the parsed line (the remainder is unused so far),
/// the board capabilities, and the console output stream.
pub type Handler = fn(&ParsedCommand<'_>, &mut Board<'_>, &mut dyn Write) -> Result<(), ShellError>;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    /// Board predicate deciding whether the command exists at all.
    /// Failing it makes the command invisible: absent from `help`,
    /// ignored like an unknown verb.
    pub available: fn(&Board<'_>) -> bool,
    pub handler: Handler,
}

fn always(_board: &Board<'_>) -> bool {
    true
}

fn has_leds(board: &Board<'_>) -> bool {
    board.leds.is_some()
}

fn has_sound(board: &Board<'_>) -> bool {
    board.sound.is_some()
}

fn has_timer(board: &Board<'_>) -> bool {
    board.timer.is_some()
}

fn has_hello_cpp(board: &Board<'_>) -> bool {
    board.demos.hello_cpp.is_some()
}

/// All commands; availability is decided per board at lookup time.
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "Show this help", available: always, handler: cmd_help },
    CommandDescriptor { name: "reboot", brief: "Reboot CPU", available: always, handler: cmd_reboot },
    CommandDescriptor { name: "led", brief: "Led demo", available: has_leds, handler: cmd_led },
    CommandDescriptor { name: "sound", brief: "Sound demo", available: has_sound, handler: cmd_sound },
    CommandDescriptor { name: "timer", brief: "Timer demo", available: has_timer, handler: cmd_timer },
    CommandDescriptor { name: "donut", brief: "Spinning donut demo", available: always, handler: cmd_donut },
    CommandDescriptor { name: "helloc", brief: "Hello C demo", available: always, handler: cmd_helloc },
    CommandDescriptor { name: "hellocpp", brief: "Hello C++ demo", available: has_hello_cpp, handler: cmd_hellocpp },
];

/// Execute a parsed command.
///
/// Unknown or unavailable commands return an error the shell never
/// prints; the console deliberately has no failure channel beyond
/// silence.
pub fn execute(
    cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    if cmd.command.is_empty() {
        return Ok(()); // Empty line, do nothing
    }

    let entry = COMMANDS
        .iter()
        .find(|c| c.name == cmd.command)
        .ok_or(ShellError::UnknownCommand)?;

    if !(entry.available)(board) {
        return Err(ShellError::Unavailable);
    }

    (entry.handler)(cmd, board, out)
}

/// Print the banner and the commands available on this board.
pub fn print_help(board: &Board<'_>, out: &mut dyn Write) {
    let _ = writeln!(out, "\n{}\n", VERSION);
    let _ = writeln!(out, "Available commands:");
    for c in COMMANDS {
        if (c.available)(board) {
            let _ = writeln!(out, "{:<18} - {}", c.name, c.brief);
        }
    }
}

// --- Command Implementations ---

fn cmd_help(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    print_help(board, out);
    Ok(())
}

fn cmd_reboot(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    _out: &mut dyn Write,
) -> Result<(), ShellError> {
    board.reset.assert_reset();
    Ok(())
}

fn cmd_led(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let Board { leds, delay, .. } = board;
    let Some(leds) = leds.as_deref_mut() else {
        return Err(ShellError::Unavailable);
    };

    let _ = writeln!(out, "Led demo...");

    let _ = writeln!(out, "Counter mode...");
    for i in 0..32 {
        leds.set(i);
        delay.delay_ms(100);
    }

    let _ = writeln!(out, "Shift mode...");
    for i in 0..4 {
        leds.set(1 << i);
        delay.delay_ms(200);
    }
    for i in 0..4 {
        leds.set(1 << (3 - i));
        delay.delay_ms(200);
    }

    let _ = writeln!(out, "Dance mode...");
    for _ in 0..4 {
        leds.set(0x55);
        delay.delay_ms(200);
        leds.set(0xaa);
        delay.delay_ms(200);
    }

    Ok(())
}

// MIDI note 57 = A3 (220 Hz)
const TONE_NOTE: u8 = 57;

fn cmd_sound(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let Board { sound, delay, .. } = board;
    let Some(sound) = sound.as_deref_mut() else {
        return Err(ShellError::Unavailable);
    };

    let _ = writeln!(out, "Sound demo...");

    let _ = writeln!(out, "Pure tone...");
    for i in 0..4u8 {
        let period = sound.midi_note_period(TONE_NOTE);
        let amplitude = (i + 1) * 4 - 1;
        sound.tone_period(period);
        sound.tone_amplitude(amplitude);
        delay.delay_ms(200);
        sound.tone_amplitude(0);
        delay.delay_ms(200);
    }

    let _ = writeln!(out, "Noise (low)...");
    for _ in 0..4 {
        sound.noise_period(512);
        sound.noise_amplitude(15);
        delay.delay_ms(50);
        sound.noise_amplitude(0);
        delay.delay_ms(350);
    }

    let _ = writeln!(out, "Noise (high)...");
    for _ in 0..4 {
        sound.noise_period(128);
        sound.noise_amplitude(15);
        delay.delay_ms(50);
        sound.noise_amplitude(0);
        delay.delay_ms(350);
    }

    Ok(())
}

/// Timer tick interrupt handler.
///
/// Runs in interrupt context: acknowledge the pending event, queue the
/// message, get out. The event-pending register is the only state
/// shared with the sampling loop.
fn timer_tick() {
    hal::ack_timer_event();
    crate::isr_info!(logging::IRQ_LOG, hal::timestamp_us(), "timer interrupt fired");
}

fn cmd_timer(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let Board { timer, irq, delay, .. } = board;
    let Some(timer) = timer.as_deref_mut() else {
        return Err(ShellError::Unavailable);
    };

    let _ = writeln!(out, "Timer demo...");

    // Quiesce the timer while reprogramming it.
    timer.set_enable(false);

    let line = timer.irq_line();
    irq.attach(line, timer_tick);
    let mask = irq.mask();
    irq.set_mask(mask | (1 << line));

    timer.set_event_enable(true);

    // Periodic tick at TIMER_TICK_HZ.
    timer.set_load(0);
    timer.set_reload(timer.clock_hz() / config::TIMER_TICK_HZ);

    timer.set_enable(true);

    for _ in 0..config::TIMER_SAMPLES {
        timer.latch_value();
        let value = timer.value();
        let _ = writeln!(out, "Value: {}", value);
        delay.delay_ms(config::TIMER_SAMPLE_DELAY_MS);
    }

    // Take the timer back out of the interrupt mask.
    let mask = irq.mask();
    irq.set_mask(mask & !(1 << line));

    Ok(())
}

fn cmd_donut(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let _ = writeln!(out, "Donut demo...");
    (board.demos.donut)(out);
    Ok(())
}

fn cmd_helloc(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let _ = writeln!(out, "Hello C demo...");
    (board.demos.hello_c)(out);
    Ok(())
}

fn cmd_hellocpp(
    _cmd: &ParsedCommand<'_>,
    board: &mut Board<'_>,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let Some(hello_cpp) = board.demos.hello_cpp else {
        return Err(ShellError::Unavailable);
    };
    let _ = writeln!(out, "Hello C++ demo...");
    hello_cpp(out);
    Ok(())
}
