#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _;

// Same panicking behavior as `panic-probe` but avoids double prints when a
// defmt assertion fires inside a test.
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
