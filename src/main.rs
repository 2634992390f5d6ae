//! Demo firmware entry point.
//!
//! Brings up the board, prints the banner, then loops forever: poll
//! the console for one byte, drain anything the interrupt handlers
//! logged. All the interesting behavior lives in the library crate.

#![cfg_attr(target_arch = "riscv32", no_std)]
#![cfg_attr(target_arch = "riscv32", no_main)]

#[cfg(target_arch = "riscv32")]
mod firmware {
    use panic_halt as _;
    use riscv_rt::entry;

    use rust_soc_demo::console::Console;
    use rust_soc_demo::demos::Demos;
    use rust_soc_demo::hal::litex::{Ctrl, CycleDelay, Irq, Leds, Sound, Timer, Uart};
    use rust_soc_demo::hal::{Board, InterruptController};
    use rust_soc_demo::logging;

    #[entry]
    fn main() -> ! {
        let mut uart = Uart::new();
        let mut leds = Leds::new();
        let mut sound = Sound::new();
        let mut timer = Timer::new();
        let mut ctrl = Ctrl::new();
        let mut irq = Irq::new();
        let mut delay = CycleDelay::new();

        // Every line masked until a demo unmasks its own.
        irq.set_mask(0);
        irq.enable_interrupts();

        let mut board = Board {
            leds: Some(&mut leds),
            sound: Some(&mut sound),
            timer: Some(&mut timer),
            reset: &mut ctrl,
            irq: &mut irq,
            delay: &mut delay,
            demos: Demos::builtin(),
        };

        let mut console = Console::new();
        console.print_banner(&board, &mut uart);

        loop {
            let _ = console.poll(&mut uart, &mut board);
            logging::drain(&mut uart);
        }
    }
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    // The demo image only means something on the SoC; host builds of
    // this package exist for the test suite.
}
