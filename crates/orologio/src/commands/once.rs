use orologio_core::clock::{Clock, SystemClock};
use orologio_core::{config, format};

/// Prints the current time once using the configured format.
///
/// Useful for checking what the configured format renders as without
/// taking over the terminal.
pub fn execute() {
    let config = config::load();
    let sample = SystemClock.now();
    println!("{}", format::format_sample(&sample, &config.clock.format));
}
